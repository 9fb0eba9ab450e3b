//! HTML projection of grouped render blocks.
//!
//! Paragraph runs become a `<section>` of `<p>` lines, list runs a `<ul>`,
//! separators a `<br>`. Image URLs are emitted verbatim, valid or not, so a
//! bad URL degrades to a broken image rather than missing output.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::group::RenderBlock;
use crate::parsing::blocks::{Element, kinds::Header};

/// Presentation knobs for [`blocks_to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Width attribute applied to every `<img>`.
    pub image_width: u32,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self { image_width: 200 }
    }
}

/// Converts render blocks to an HTML fragment, one top-level element per
/// block, each on its own line.
pub fn blocks_to_html(blocks: &[RenderBlock], options: &HtmlOptions) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, options, &mut out);
        out.push('\n');
    }
    out
}

fn emit_block(block: &RenderBlock, options: &HtmlOptions, out: &mut String) {
    match block {
        RenderBlock::Paragraph { lines } => {
            out.push_str("<section>");
            for line in lines {
                out.push_str("<p>");
                out.push_str(&encode_text(line));
                out.push_str("</p>");
            }
            out.push_str("</section>");
        }
        RenderBlock::List { items } => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                out.push_str(&encode_text(item));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        RenderBlock::Single { element } => emit_element(element, options, out),
    }
}

fn emit_element(element: &Element, options: &HtmlOptions, out: &mut String) {
    match element {
        Element::Header { level, text } => {
            // Out-of-range levels were already reported; clamp for valid tags.
            let level = (*level).clamp(Header::MIN_LEVEL, Header::MAX_LEVEL);
            out.push_str(&format!("<h{level}>{}</h{level}>", encode_text(text)));
        }
        Element::Image { url } => {
            out.push_str(&format!(
                "<img src=\"{}\" width=\"{}\">",
                encode_double_quoted_attribute(url),
                options.image_width
            ));
        }
        Element::Separator => out.push_str("<br>"),
        // Flow elements only reach here when rendered without grouping.
        Element::Paragraph { text } => {
            out.push_str("<p>");
            out.push_str(&encode_text(text));
            out.push_str("</p>");
        }
        Element::ListItem { text } => {
            out.push_str("<ul><li>");
            out.push_str(&encode_text(text));
            out.push_str("</li></ul>");
        }
    }
}
