use crate::{
    Cycle,
    parsing::blocks::{Element, ElementKind},
    render::RenderBlock,
};

/// Validates parse and grouping invariants for `text`.
///
/// Asserts that:
/// - No more elements than lines, each on a valid line, in ascending order
/// - Only a header marker with no text may leave a line without an element
/// - Diagnostics only reference existing lines
/// - No render block is empty and no two adjacent blocks share a flow kind
/// - Unpacking the blocks reproduces the element sequence
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, cycle: &Cycle) {
    let lines: Vec<&str> = text.split('\n').collect();
    let elements = &cycle.parsed.elements;

    assert!(
        elements.len() <= lines.len(),
        "more elements ({}) than lines ({})",
        elements.len(),
        lines.len()
    );
    for pair in elements.windows(2) {
        assert!(
            pair[0].line < pair[1].line,
            "elements out of order: line {} before line {}",
            pair[0].line,
            pair[1].line
        );
    }
    for (index, line) in lines.iter().enumerate() {
        if !elements.iter().any(|n| n.line == index) {
            assert!(
                line.starts_with('#') && line.trim_start_matches('#').is_empty(),
                "line {index} {line:?} produced no element"
            );
        }
    }
    for (line, diagnostics) in cycle.parsed.errors.all() {
        assert!(line < lines.len(), "diagnostic on missing line {line}");
        assert!(!diagnostics.is_empty(), "empty diagnostic entry on line {line}");
    }

    for block in &cycle.blocks {
        match block {
            RenderBlock::Paragraph { lines } => assert!(!lines.is_empty(), "empty paragraph block"),
            RenderBlock::List { items } => assert!(!items.is_empty(), "empty list block"),
            RenderBlock::Single { element } => assert!(
                !element.kind().is_flow(),
                "flow element passed through ungrouped: {element:?}"
            ),
        }
    }
    for pair in cycle.blocks.windows(2) {
        let kinds = (flow_kind(&pair[0]), flow_kind(&pair[1]));
        assert!(
            !matches!(kinds, (Some(a), Some(b)) if a == b),
            "adjacent blocks share a flow kind: {pair:?}"
        );
    }

    let unpacked: Vec<Element> = cycle.blocks.iter().flat_map(unpack).collect();
    let original: Vec<Element> = elements.iter().map(|n| n.element.clone()).collect();
    assert_eq!(unpacked, original, "grouping changed the element sequence");
}

fn flow_kind(block: &RenderBlock) -> Option<ElementKind> {
    match block {
        RenderBlock::Paragraph { .. } => Some(ElementKind::Paragraph),
        RenderBlock::List { .. } => Some(ElementKind::ListItem),
        RenderBlock::Single { .. } => None,
    }
}

fn unpack(block: &RenderBlock) -> Vec<Element> {
    match block {
        RenderBlock::Paragraph { lines } => lines
            .iter()
            .map(|text| Element::Paragraph { text: text.clone() })
            .collect(),
        RenderBlock::List { items } => items
            .iter()
            .map(|text| Element::ListItem { text: text.clone() })
            .collect(),
        RenderBlock::Single { element } => vec![element.clone()],
    }
}
