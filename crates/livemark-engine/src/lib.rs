//! # livemark engine
//!
//! Turns plain text written in a small markdown-like subset into typed block
//! elements, per-line diagnostics and render-ready blocks.
//!
//! One parse cycle runs synchronously from raw text to output:
//!
//! ```text
//! text -> parse_document -> (elements, error report) -> group_for_rendering -> blocks
//! ```
//!
//! Every cycle re-parses the whole text; nothing is carried between cycles.
//!
//! ```
//! use livemark_engine::{RenderBlock, run_cycle};
//!
//! let cycle = run_cycle("# Title\n* one\n* two\n![img](ftp://x)");
//! assert_eq!(cycle.blocks.len(), 3);
//! assert!(matches!(cycle.blocks[1], RenderBlock::List { .. }));
//! assert_eq!(cycle.parsed.messages(), vec!["line: 3: Only http src available"]);
//! ```

pub mod diagnostics;
pub mod parsing;
pub mod render;
pub mod snapshot;

use serde::Serialize;

pub use diagnostics::{Diagnostic, ErrorReport};
pub use parsing::{
    ParsedDoc,
    blocks::{Element, ElementKind, ElementNode},
    parse_document,
};
pub use render::{
    GutterMark, HtmlOptions, RenderBlock, blocks_to_html, group_for_rendering, gutter_marks,
};

/// Everything produced by one parse cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cycle {
    pub parsed: ParsedDoc,
    pub blocks: Vec<RenderBlock>,
}

impl Cycle {
    pub fn gutter(&self) -> Vec<GutterMark> {
        gutter_marks(&self.parsed)
    }
}

/// Parses `text` and groups the result for rendering.
pub fn run_cycle(text: &str) -> Cycle {
    let parsed = parse_document(text);
    let blocks = group_for_rendering(&parsed.elements);
    Cycle { parsed, blocks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn outline_of_a_mixed_document() {
        let text = "# Notes\nfirst line\nsecond line\n* apples\n* pears\n\n![img](http://x/a.png)\n#######deep\n![img]broken";
        let cycle = run_cycle(text);
        snapshot::invariants(text, &cycle);

        assert_snapshot!(snapshot::outline(&cycle), @r#"
        elements:
          0 header(1) " Notes"
          1 paragraph "first line"
          2 paragraph "second line"
          3 item " apples"
          4 item " pears"
          5 separator
          6 image "http://x/a.png"
          7 header(7) "deep"
          8 image ""
        blocks:
          header(1) " Notes"
          paragraph ["first line", "second line"]
          list [" apples", " pears"]
          separator
          image "http://x/a.png"
          header(7) "deep"
          image ""
        diagnostics:
          line: 7: Invalid header size: 7
          line: 8: Invalid img format, expected ![img](<url>)
          line: 8: Only http src available
        "#);
    }

    #[test]
    fn gutter_follows_the_parsed_document() {
        let cycle = run_cycle("![img](ftp://x)");
        assert_eq!(
            cycle.gutter(),
            vec![
                GutterMark {
                    index: 0,
                    has_error: true
                },
                GutterMark {
                    index: 1,
                    has_error: false
                },
            ]
        );
    }
}
