//! Block kinds with owned delimiters and builders.
//!
//! All syntax knowledge for a kind (its marker, how the marker is stripped,
//! which validation rules apply) lives in that kind's module.

pub mod header;
pub mod image;
pub mod list_item;
pub mod paragraph;
pub mod separator;

pub use header::Header;
pub use image::Image;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use separator::Separator;

use crate::diagnostics::Diagnostic;

use super::types::Element;

/// A validation rule yielding at most one diagnostic for its subject.
pub type Rule<T> = fn(&T) -> Option<Diagnostic>;

/// Runs every rule in order without short-circuiting.
pub fn run_rules<T>(rules: &[Rule<T>], subject: &T) -> Vec<Diagnostic> {
    rules.iter().filter_map(|rule| rule(subject)).collect()
}

/// Output of a builder for one classified line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Built {
    /// `None` only for a header marker with no text after it.
    pub element: Option<Element>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Built {
    pub fn element(element: Element) -> Self {
        Self {
            element: Some(element),
            diagnostics: vec![],
        }
    }
}
