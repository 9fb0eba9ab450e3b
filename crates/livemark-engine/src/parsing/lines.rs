/// A reference to a single source line with its 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Position of this line in the split input.
    pub index: usize,
    /// The line text without its `\n` terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`, split on `\n`.
///
/// Empty lines are preserved, including a trailing empty line after a final
/// `\n`, so indices match what the user sees in the editor. An empty input is
/// a single empty line.
pub fn lines_with_index(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    text.split('\n')
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        lines_with_index(input).map(|l| l.text).collect()
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        assert_eq!(texts("a\n"), vec!["a", ""]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(texts("a\n\n\nb"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn carriage_returns_are_not_stripped() {
        assert_eq!(texts("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn indices_are_sequential() {
        let indices: Vec<usize> = lines_with_index("x\ny\nz").map(|l| l.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
