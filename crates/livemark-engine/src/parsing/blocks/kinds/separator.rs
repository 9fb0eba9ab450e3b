use super::{super::types::Element, Built};

/// Separator block type: a line that is empty after trimming whitespace.
pub struct Separator;

impl Separator {
    pub fn matches(line: &str) -> bool {
        line.trim().is_empty()
    }

    pub fn build() -> Built {
        Built::element(Element::Separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_lines_match() {
        assert!(Separator::matches(""));
        assert!(Separator::matches("   "));
        assert!(Separator::matches("\t \r"));
        assert!(!Separator::matches(" x "));
    }
}
