use serde::Serialize;

/// A typed block element produced from one source line.
///
/// Text payloads have their marker syntax stripped. `Separator` is purely
/// structural and carries nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// `#` to `######` followed by text. `level` is the raw `#` count and may
    /// be out of range; such headers are still emitted alongside a diagnostic.
    Header { level: usize, text: String },
    /// A `*` line, text kept verbatim after the marker.
    ListItem { text: String },
    /// Any line no other rule claims, kept verbatim.
    Paragraph { text: String },
    /// `![img](<url>)`. The URL is whatever was extracted, valid or not.
    Image { url: String },
    /// A whitespace-only line.
    Separator,
}

/// Fieldless discriminant of [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Header,
    ListItem,
    Paragraph,
    Image,
    Separator,
}

impl ElementKind {
    /// Flow kinds merge with adjacent elements of the same kind when rendered.
    pub fn is_flow(self) -> bool {
        matches!(self, ElementKind::Paragraph | ElementKind::ListItem)
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Header { .. } => ElementKind::Header,
            Element::ListItem { .. } => ElementKind::ListItem,
            Element::Paragraph { .. } => ElementKind::Paragraph,
            Element::Image { .. } => ElementKind::Image,
            Element::Separator => ElementKind::Separator,
        }
    }
}

/// An element together with the 0-based source line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementNode {
    pub line: usize,
    pub element: Element,
}
