use super::{super::types::Element, Built};

/// List item block type with owned marker.
pub struct ListItem;

impl ListItem {
    /// The list item marker character.
    pub const MARKER: char = '*';

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Strips exactly the marker; the remainder is kept verbatim, including
    /// any leading space.
    pub fn build(line: &str) -> Built {
        let text = line.strip_prefix(Self::MARKER).unwrap_or(line);
        Built::element(Element::ListItem {
            text: text.to_string(),
        })
    }
}
