//! Line-level diagnostics collected during a parse cycle.
//!
//! Diagnostics never abort parsing. Each one is attached to the 0-based line
//! it was raised on and the element for that line is still produced.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// A single recoverable issue found on one source line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Diagnostic {
    /// A header whose `#` run is outside `1..=6`.
    #[error("Invalid header size: {level}")]
    InvalidHeaderSize { level: usize },
    /// An image line not wrapped as `![img](<url>)`.
    #[error("Invalid img format, expected ![img](<url>)")]
    InvalidImageSyntax,
    /// An image URL that does not start with `http`.
    #[error("Only http src available")]
    DisallowedImageScheme,
}

impl Diagnostic {
    /// Human-readable reason shown to the user.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Diagnostics keyed by source line, iterated in ascending line order.
///
/// Lines without diagnostics have no entry. Within a line, diagnostics keep
/// the order in which they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    by_line: BTreeMap<usize, Vec<Diagnostic>>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `diagnostic` to the sequence for `line`, creating it if absent.
    pub fn record(&mut self, line: usize, diagnostic: Diagnostic) {
        self.by_line.entry(line).or_default().push(diagnostic);
    }

    /// All `(line, diagnostics)` pairs in ascending line order.
    pub fn all(&self) -> impl Iterator<Item = (usize, &[Diagnostic])> + '_ {
        self.by_line
            .iter()
            .map(|(line, diagnostics)| (*line, diagnostics.as_slice()))
    }

    pub fn get(&self, line: usize) -> Option<&[Diagnostic]> {
        self.by_line.get(&line).map(Vec::as_slice)
    }

    /// Used by gutter renderers to mark lines.
    pub fn has_diagnostics(&self, line: usize) -> bool {
        self.by_line.contains_key(&line)
    }

    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }

    /// Total number of diagnostics across all lines.
    pub fn len(&self) -> usize {
        self.by_line.values().map(Vec::len).sum()
    }

    /// Flattened listing, one `"line: {n}: {reason}"` entry per diagnostic.
    pub fn messages(&self) -> Vec<String> {
        self.all()
            .flat_map(|(line, diagnostics)| {
                diagnostics
                    .iter()
                    .map(move |d| format!("line: {line}: {}", d.reason()))
            })
            .collect()
    }
}
