use crate::diagnostics::Diagnostic;

use super::{super::types::Element, Built, Rule, run_rules};

/// Image block type: `![img](<url>)`.
pub struct Image;

/// The parts of an image line after its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSyntax<'a> {
    /// Everything after `![img]`, expected to be `(<url>)`.
    pub section: &'a str,
    /// Text between the first `(` and the last `)` of `section`, or empty
    /// when either delimiter is missing or they are out of order.
    pub url: &'a str,
}

impl Image {
    /// The literal prefix that opens an image line.
    pub const PREFIX: &'static str = "![img]";
    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';
    /// Required start of every image URL.
    pub const SCHEME: &'static str = "http";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    pub fn split(line: &str) -> ImageSyntax<'_> {
        let section = line.strip_prefix(Self::PREFIX).unwrap_or(line);
        ImageSyntax {
            section,
            url: extract_url(section),
        }
    }

    /// Builds an image element.
    ///
    /// Every rule runs independently, so a line can carry both a syntax and a
    /// scheme diagnostic. The element is always produced with whatever URL
    /// was extracted.
    pub fn build(line: &str) -> Built {
        let syntax = Self::split(line);
        let diagnostics = run_rules(&rules(), &syntax);

        Built {
            element: Some(Element::Image {
                url: syntax.url.to_string(),
            }),
            diagnostics,
        }
    }
}

fn rules<'a>() -> [Rule<ImageSyntax<'a>>; 2] {
    [
        wrapped_in_parens as Rule<ImageSyntax<'a>>,
        http_scheme as Rule<ImageSyntax<'a>>,
    ]
}

fn extract_url(section: &str) -> &str {
    let Some(open) = section.find(Image::OPEN) else {
        return "";
    };
    let start = open + Image::OPEN.len_utf8();
    match section.rfind(Image::CLOSE) {
        Some(close) if close >= start => &section[start..close],
        _ => "",
    }
}

fn wrapped_in_parens(syntax: &ImageSyntax<'_>) -> Option<Diagnostic> {
    let wrapped =
        syntax.section.starts_with(Image::OPEN) && syntax.section.ends_with(Image::CLOSE);
    (!wrapped).then_some(Diagnostic::InvalidImageSyntax)
}

fn http_scheme(syntax: &ImageSyntax<'_>) -> Option<Diagnostic> {
    (!syntax.url.starts_with(Image::SCHEME)).then_some(Diagnostic::DisallowedImageScheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn well_formed_http_image_is_clean() {
        let built = Image::build("![img](http://x)");
        assert_eq!(
            built.element,
            Some(Element::Image {
                url: "http://x".into()
            })
        );
        assert!(built.diagnostics.is_empty());
    }

    #[test]
    fn https_counts_as_http() {
        assert!(Image::build("![img](https://x/a.png)").diagnostics.is_empty());
    }

    #[test]
    fn missing_parens_also_fails_the_scheme_rule() {
        let built = Image::build("![img]nope");
        assert_eq!(built.element, Some(Element::Image { url: String::new() }));
        assert_eq!(
            built.diagnostics,
            vec![
                Diagnostic::InvalidImageSyntax,
                Diagnostic::DisallowedImageScheme
            ]
        );
    }

    #[test]
    fn non_http_scheme_is_reported_once() {
        let built = Image::build("![img](ftp://x)");
        assert_eq!(
            built.element,
            Some(Element::Image {
                url: "ftp://x".into()
            })
        );
        assert_eq!(built.diagnostics, vec![Diagnostic::DisallowedImageScheme]);
    }

    #[test]
    fn both_rules_fire_in_order() {
        let built = Image::build("![img] (ftp://x)");
        assert_eq!(
            built.diagnostics,
            vec![
                Diagnostic::InvalidImageSyntax,
                Diagnostic::DisallowedImageScheme
            ]
        );
        assert_eq!(
            built.element,
            Some(Element::Image {
                url: "ftp://x".into()
            })
        );
    }

    #[rstest]
    #[case("", "")]
    #[case("nope", "")]
    #[case("(http://x", "")]
    #[case("http://x)", "")]
    #[case(")(", "")]
    #[case("()", "")]
    #[case("(a)(b)", "a)(b")]
    #[case(" (http://x) trailing", "http://x")]
    fn url_extraction_is_total(#[case] section: &str, #[case] url: &str) {
        assert_eq!(extract_url(section), url);
    }

    #[test]
    fn bare_prefix_reports_both() {
        let built = Image::build("![img]");
        assert_eq!(built.element, Some(Element::Image { url: String::new() }));
        assert_eq!(built.diagnostics.len(), 2);
    }
}
