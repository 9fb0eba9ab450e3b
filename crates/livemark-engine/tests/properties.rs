//! Property tests over arbitrary documents built from the supported syntax.

use livemark_engine::{Element, RenderBlock, run_cycle, snapshot};
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "#{1,9}[ a-z]{0,6}",
        "\\*[ a-z*]{0,6}",
        "!\\[img\\][(]?(http|ftp)?[:/a-z.]{0,6}[)]?",
        "[ \t]{0,3}",
        "[ a-z#*!()]{1,8}",
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn parse_and_group_hold_invariants(text in document()) {
        let cycle = run_cycle(&text);
        snapshot::invariants(&text, &cycle);
    }

    #[test]
    fn at_most_one_element_per_line(text in document()) {
        let cycle = run_cycle(&text);
        let line_count = text.split('\n').count();
        prop_assert!(cycle.parsed.elements.len() <= line_count);
    }

    #[test]
    fn reparsing_is_idempotent(text in document()) {
        let first = run_cycle(&text);
        let second = run_cycle(&text);
        prop_assert_eq!(&first.parsed.elements, &second.parsed.elements);
        prop_assert_eq!(&first.blocks, &second.blocks);
        prop_assert_eq!(first.parsed.messages(), second.parsed.messages());
    }

    #[test]
    fn separators_always_stand_alone(text in document()) {
        let cycle = run_cycle(&text);
        let separators = cycle
            .parsed
            .elements
            .iter()
            .filter(|n| n.element == Element::Separator)
            .count();
        let separator_blocks = cycle
            .blocks
            .iter()
            .filter(|b| matches!(b, RenderBlock::Single { element: Element::Separator }))
            .count();
        prop_assert_eq!(separators, separator_blocks);
    }

    #[test]
    fn messages_are_in_ascending_line_order(text in document()) {
        let cycle = run_cycle(&text);
        let lines: Vec<usize> = cycle.parsed.errors.all().map(|(line, _)| line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        prop_assert_eq!(lines, sorted);
        prop_assert_eq!(cycle.parsed.messages().len(), cycle.parsed.errors.len());
    }
}
