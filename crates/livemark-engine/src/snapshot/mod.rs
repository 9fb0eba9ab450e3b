//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a parse cycle as a stable text outline for
//!   `insta` snapshot testing
//! - **`invariants`**: runtime checks for parser and grouper correctness
//!   (line accounting, ordering, grouping law)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
