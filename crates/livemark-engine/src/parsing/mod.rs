pub mod blocks;
pub mod lines;

use serde::Serialize;

use crate::diagnostics::ErrorReport;
use blocks::{DocumentBuilder, ElementNode, MarkdownLineClassifier};
use lines::lines_with_index;

/// Output of one parse pass: the flat element sequence in source order and
/// the diagnostics raised along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub elements: Vec<ElementNode>,
    pub errors: ErrorReport,
}

impl ParsedDoc {
    /// Flattened `"line: {n}: {reason}"` listing in ascending line order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.messages()
    }
}

/// Parses the full text into elements and diagnostics.
///
/// Pure: the whole text is re-parsed on every call and no state is kept
/// between calls.
pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = DocumentBuilder::new();
    let mut line_count = 0usize;

    for lr in lines_with_index(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
        line_count += 1;
    }

    let (elements, errors) = builder.finish();
    log::debug!(
        "parsed {line_count} lines into {} elements with {} diagnostics",
        elements.len(),
        errors.len()
    );

    ParsedDoc { elements, errors }
}
