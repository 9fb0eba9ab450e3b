use crate::diagnostics::Diagnostic;

use super::{super::types::Element, Built, Rule, run_rules};

/// Header block type with owned marker and level bounds.
pub struct Header;

/// The parts of a header line after the marker run has been measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSyntax<'a> {
    /// Number of leading `#` characters.
    pub level: usize,
    /// Everything after the `#` run.
    pub text: &'a str,
}

impl Header {
    /// The header marker character.
    pub const MARKER: char = '#';
    pub const MIN_LEVEL: usize = 1;
    pub const MAX_LEVEL: usize = 6;

    /// Validation rules applied to the `#` count.
    const RULES: &'static [Rule<usize>] = &[level_in_range];

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Splits a header line into its `#` count and remaining text.
    pub fn split(line: &str) -> HeaderSyntax<'_> {
        let text = line.trim_start_matches(Self::MARKER);
        HeaderSyntax {
            level: line.len() - text.len(),
            text,
        }
    }

    /// Builds a header element.
    ///
    /// An out-of-range level is reported but the element is still produced.
    /// A marker run with nothing after it produces no element at all.
    pub fn build(line: &str) -> Built {
        let syntax = Self::split(line);
        let diagnostics = run_rules(Self::RULES, &syntax.level);

        let element = (!syntax.text.is_empty()).then(|| Element::Header {
            level: syntax.level,
            text: syntax.text.to_string(),
        });

        Built {
            element,
            diagnostics,
        }
    }
}

fn level_in_range(level: &usize) -> Option<Diagnostic> {
    (!(Header::MIN_LEVEL..=Header::MAX_LEVEL).contains(level))
        .then_some(Diagnostic::InvalidHeaderSize { level: *level })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("#a", 1)]
    #[case("##a", 2)]
    #[case("###a", 3)]
    #[case("####a", 4)]
    #[case("#####a", 5)]
    #[case("######a", 6)]
    fn valid_levels_raise_nothing(#[case] line: &str, #[case] level: usize) {
        let built = Header::build(line);
        assert_eq!(
            built.element,
            Some(Element::Header {
                level,
                text: "a".into()
            })
        );
        assert!(built.diagnostics.is_empty());
    }

    #[test]
    fn level_seven_is_reported_but_still_built() {
        let built = Header::build("#######x");
        assert_eq!(
            built.element,
            Some(Element::Header {
                level: 7,
                text: "x".into()
            })
        );
        assert_eq!(
            built.diagnostics,
            vec![Diagnostic::InvalidHeaderSize { level: 7 }]
        );
    }

    #[test]
    fn marker_only_yields_no_element() {
        let built = Header::build("###");
        assert_eq!(built.element, None);
        assert!(built.diagnostics.is_empty());
    }

    #[test]
    fn oversized_marker_only_still_reports() {
        let built = Header::build("########");
        assert_eq!(built.element, None);
        assert_eq!(
            built.diagnostics,
            vec![Diagnostic::InvalidHeaderSize { level: 8 }]
        );
    }

    #[test]
    fn text_keeps_leading_space() {
        assert_eq!(
            Header::build("## Title").element,
            Some(Element::Header {
                level: 2,
                text: " Title".into()
            })
        );
    }

    #[test]
    fn later_markers_belong_to_the_text() {
        assert_eq!(
            Header::split("# a # b"),
            HeaderSyntax {
                level: 1,
                text: " a # b"
            }
        );
    }
}
