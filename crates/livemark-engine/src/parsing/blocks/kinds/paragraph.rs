use super::{super::types::Element, Built};

/// Paragraph block type.
///
/// Paragraphs have no delimiters. They are the catch-all for any line no
/// other rule claims, and keep the raw line including surrounding whitespace.
pub struct Paragraph;

impl Paragraph {
    pub fn build(line: &str) -> Built {
        Built::element(Element::Paragraph {
            text: line.to_string(),
        })
    }
}
