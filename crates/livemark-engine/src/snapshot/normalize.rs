use std::fmt::Write;

use crate::{Cycle, parsing::blocks::Element, render::RenderBlock};

/// Renders a cycle as a human-readable outline.
///
/// One line per element (`{line} {kind} {payload:?}`), then one per block,
/// then one per diagnostic. Payloads are debug-quoted so whitespace is
/// visible.
pub fn outline(cycle: &Cycle) -> String {
    let mut out = String::new();

    out.push_str("elements:\n");
    for node in &cycle.parsed.elements {
        let _ = writeln!(out, "  {} {}", node.line, describe(&node.element));
    }

    out.push_str("blocks:\n");
    for block in &cycle.blocks {
        let _ = match block {
            RenderBlock::Paragraph { lines } => writeln!(out, "  paragraph {lines:?}"),
            RenderBlock::List { items } => writeln!(out, "  list {items:?}"),
            RenderBlock::Single { element } => writeln!(out, "  {}", describe(element)),
        };
    }

    out.push_str("diagnostics:\n");
    for message in cycle.parsed.messages() {
        let _ = writeln!(out, "  {message}");
    }

    out
}

fn describe(element: &Element) -> String {
    match element {
        Element::Header { level, text } => format!("header({level}) {text:?}"),
        Element::ListItem { text } => format!("item {text:?}"),
        Element::Paragraph { text } => format!("paragraph {text:?}"),
        Element::Image { url } => format!("image {url:?}"),
        Element::Separator => "separator".to_string(),
    }
}
