use crate::parsing::lines::LineRef;

use super::kinds::{Header, Image, ListItem, Separator};

/// Which block rule claims a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Header,
    ListItem,
    Image,
    Separator,
    Paragraph,
}

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to its
/// neighbours; grouping across lines happens at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// 0-based source line index.
    pub line: usize,
    pub rule: LineRule,
    /// The raw line text.
    pub text: &'a str,
}

/// Classifies individual lines for the parse pass.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Picks the first matching rule in precedence order: header, list item,
    /// image, separator, then paragraph as the catch-all.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        LineClass {
            line: lr.index,
            rule: Self::rule_for(lr.text),
            text: lr.text,
        }
    }

    pub fn rule_for(text: &str) -> LineRule {
        if Header::matches(text) {
            LineRule::Header
        } else if ListItem::matches(text) {
            LineRule::ListItem
        } else if Image::matches(text) {
            LineRule::Image
        } else if Separator::matches(text) {
            LineRule::Separator
        } else {
            LineRule::Paragraph
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# title", LineRule::Header)]
    #[case("#* both", LineRule::Header)]
    #[case("#![img](http://x)", LineRule::Header)]
    #[case("* item", LineRule::ListItem)]
    #[case("*![img](http://x)", LineRule::ListItem)]
    #[case("![img](http://x)", LineRule::Image)]
    #[case("![img]", LineRule::Image)]
    #[case("![image](http://x)", LineRule::Paragraph)]
    #[case("", LineRule::Separator)]
    #[case("  \t", LineRule::Separator)]
    #[case(" # indented", LineRule::Paragraph)]
    #[case(" * indented", LineRule::Paragraph)]
    #[case("plain text", LineRule::Paragraph)]
    fn first_match_wins(#[case] text: &str, #[case] rule: LineRule) {
        assert_eq!(MarkdownLineClassifier::rule_for(text), rule);
    }

    #[test]
    fn classify_carries_line_index_and_text() {
        let lr = LineRef {
            index: 4,
            text: "* x",
        };
        let class = MarkdownLineClassifier.classify(&lr);
        assert_eq!(
            class,
            LineClass {
                line: 4,
                rule: LineRule::ListItem,
                text: "* x"
            }
        );
    }
}
