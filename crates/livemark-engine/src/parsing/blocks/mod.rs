//! # Block Parsing
//!
//! Two-phase, line-at-a-time block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is matched against the
//!    block rules in precedence order and tagged with a `LineRule`
//!
//! 2. **Block Construction** (`builder`): a `DocumentBuilder` hands each
//!    classified line to its kind's builder and collects the resulting
//!    `ElementNode`s and diagnostics
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Element`, `ElementKind`, `ElementNode`)
//! - **`kinds`**: Block kinds with owned delimiters and validation rules
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `DocumentBuilder` accumulating one parse pass
//!
//! ## Key Invariants
//!
//! - Every line is claimed by exactly one rule; no line is rejected
//! - A line yields at most one element, and zero only for a header marker
//!   with no text after it
//! - Diagnostics never suppress the element for their line

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::DocumentBuilder;
pub use classify::{LineClass, LineRule, MarkdownLineClassifier};
pub use types::{Element, ElementKind, ElementNode};
