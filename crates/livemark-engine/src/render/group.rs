use serde::Serialize;

use crate::parsing::blocks::{Element, ElementNode};

/// A render-ready unit.
///
/// Runs of consecutive paragraph lines or list items are merged into one
/// block; standalone elements pass through individually. A `Paragraph` or
/// `List` block is never empty, and two adjacent blocks never share a flow
/// kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBlock {
    /// Consecutive paragraph lines, rendered as one section.
    Paragraph { lines: Vec<String> },
    /// Consecutive list items, rendered as one list.
    List { items: Vec<String> },
    /// A header, image or separator.
    Single { element: Element },
}

/// Groups the flat element sequence into render blocks in one left to right
/// walk.
pub fn group_for_rendering(elements: &[ElementNode]) -> Vec<RenderBlock> {
    let mut grouper = Grouper::default();
    for node in elements {
        grouper.push(&node.element);
    }
    let blocks = grouper.finish();
    log::debug!(
        "grouped {} elements into {} blocks",
        elements.len(),
        blocks.len()
    );
    blocks
}

#[derive(Default)]
struct Grouper {
    paragraph: Vec<String>,
    list: Vec<String>,
    out: Vec<RenderBlock>,
}

impl Grouper {
    fn push(&mut self, element: &Element) {
        if !matches!(element, Element::Paragraph { .. }) {
            self.flush_paragraph();
        }
        if !matches!(element, Element::ListItem { .. }) {
            self.flush_list();
        }

        match element {
            Element::Paragraph { text } => self.paragraph.push(text.clone()),
            Element::ListItem { text } => self.list.push(text.clone()),
            other => self.out.push(RenderBlock::Single {
                element: other.clone(),
            }),
        }
    }

    fn finish(mut self) -> Vec<RenderBlock> {
        // EOF flush
        self.flush_paragraph();
        self.flush_list();
        self.out
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let lines = std::mem::take(&mut self.paragraph);
            self.out.push(RenderBlock::Paragraph { lines });
        }
    }

    fn flush_list(&mut self) {
        if !self.list.is_empty() {
            let items = std::mem::take(&mut self.list);
            self.out.push(RenderBlock::List { items });
        }
    }
}
