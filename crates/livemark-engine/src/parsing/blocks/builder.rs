use crate::diagnostics::ErrorReport;

use super::{
    classify::{LineClass, LineRule},
    kinds::{Built, Header, Image, ListItem, Paragraph, Separator},
    types::ElementNode,
};

/// Accumulates elements and diagnostics for one parse pass.
///
/// A builder lives for exactly one call to
/// [`parse_document`](crate::parsing::parse_document); nothing is carried into
/// the next cycle.
pub struct DocumentBuilder {
    elements: Vec<ElementNode>,
    errors: ErrorReport,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            elements: vec![],
            errors: ErrorReport::new(),
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        let built = match c.rule {
            LineRule::Header => Header::build(c.text),
            LineRule::ListItem => ListItem::build(c.text),
            LineRule::Image => Image::build(c.text),
            LineRule::Separator => Separator::build(),
            LineRule::Paragraph => Paragraph::build(c.text),
        };
        self.accept(c.line, built);
    }

    pub fn finish(self) -> (Vec<ElementNode>, ErrorReport) {
        (self.elements, self.errors)
    }

    fn accept(&mut self, line: usize, built: Built) {
        for diagnostic in built.diagnostics {
            self.errors.record(line, diagnostic);
        }
        if let Some(element) = built.element {
            self.elements.push(ElementNode { line, element });
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostics::Diagnostic, parsing::blocks::Element};
    use pretty_assertions::assert_eq;

    fn class(line: usize, rule: LineRule, text: &str) -> LineClass<'_> {
        LineClass { line, rule, text }
    }

    #[test]
    fn records_diagnostics_even_without_element() {
        let mut builder = DocumentBuilder::new();
        builder.push(&class(0, LineRule::Header, "#########"));
        let (elements, errors) = builder.finish();

        assert!(elements.is_empty());
        assert_eq!(
            errors.get(0),
            Some([Diagnostic::InvalidHeaderSize { level: 9 }].as_slice())
        );
    }

    #[test]
    fn elements_keep_their_source_line() {
        let mut builder = DocumentBuilder::new();
        builder.push(&class(0, LineRule::Paragraph, "a"));
        builder.push(&class(1, LineRule::Separator, ""));
        builder.push(&class(2, LineRule::ListItem, "*b"));
        let (elements, errors) = builder.finish();

        assert!(errors.is_empty());
        assert_eq!(
            elements,
            vec![
                ElementNode {
                    line: 0,
                    element: Element::Paragraph { text: "a".into() }
                },
                ElementNode {
                    line: 1,
                    element: Element::Separator
                },
                ElementNode {
                    line: 2,
                    element: Element::ListItem { text: "b".into() }
                },
            ]
        );
    }
}
