//! # Rendering Support
//!
//! Everything a presentation layer needs from a parse cycle, without any
//! presentation logic of its own beyond the HTML projection.
//!
//! - **`group`**: merges flow element runs into `RenderBlock`s
//! - **`gutter`**: per-index error markers for a line-number gutter
//! - **`html`**: HTML fragment for a block sequence

pub mod group;
pub mod gutter;
pub mod html;

pub use group::{RenderBlock, group_for_rendering};
pub use gutter::{GutterMark, gutter_marks};
pub use html::{HtmlOptions, blocks_to_html};
