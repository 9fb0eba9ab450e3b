use serde::Serialize;

use crate::parsing::ParsedDoc;

/// One gutter marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GutterMark {
    pub index: usize,
    /// Whether the report holds diagnostics for `index`.
    pub has_error: bool,
}

/// Marks for every index from 0 to the element count inclusive.
pub fn gutter_marks(doc: &ParsedDoc) -> Vec<GutterMark> {
    (0..=doc.elements.len())
        .map(|index| GutterMark {
            index,
            has_error: doc.errors.has_diagnostics(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn one_mark_past_the_last_element() {
        let doc = parse_document("a\nb");
        let marks = gutter_marks(&doc);
        assert_eq!(marks.len(), 3);
        assert_eq!(
            marks.iter().map(|m| m.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn error_lines_are_flagged() {
        let doc = parse_document("ok\n![img](ftp://x)\nok");
        let flagged: Vec<usize> = gutter_marks(&doc)
            .into_iter()
            .filter(|m| m.has_error)
            .map(|m| m.index)
            .collect();
        assert_eq!(flagged, vec![1]);
    }

    #[test]
    fn errors_beyond_the_element_count_are_not_marked() {
        let doc = parse_document("###\n####\n#########");
        assert!(doc.elements.is_empty());
        let marks = gutter_marks(&doc);
        assert_eq!(
            marks,
            vec![GutterMark {
                index: 0,
                has_error: false
            }]
        );
    }
}
