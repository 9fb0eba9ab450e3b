//! Terminal projection of render blocks for the preview pane.

use livemark_engine::{Element, RenderBlock};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const BULLET: &str = "• ";

/// Converts render blocks into styled preview lines.
///
/// Paragraph and list runs are followed by a blank line; a separator is a
/// single blank line.
pub fn preview_lines(blocks: &[RenderBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            RenderBlock::Paragraph { lines: paragraph } => {
                lines.extend(paragraph.iter().map(|l| Line::from(l.clone())));
                lines.push(Line::default());
            }
            RenderBlock::List { items } => {
                lines.extend(items.iter().map(|item| {
                    Line::from(vec![
                        Span::styled(BULLET, Style::default().fg(Color::Yellow)),
                        Span::raw(item.clone()),
                    ])
                }));
                lines.push(Line::default());
            }
            RenderBlock::Single { element } => lines.push(element_line(element)),
        }
    }

    lines
}

fn element_line(element: &Element) -> Line<'static> {
    match element {
        Element::Header { level, text } => {
            Line::from(Span::styled(text.trim().to_string(), header_style(*level)))
        }
        Element::Image { url } => Line::from(Span::styled(
            format!("[image: {url}]"),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )),
        Element::Separator => Line::default(),
        Element::Paragraph { text } => Line::from(text.clone()),
        Element::ListItem { text } => Line::from(format!("{BULLET}{text}")),
    }
}

fn header_style(level: usize) -> Style {
    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    if level <= 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}
