// Paragraph splitting.
//
// A paragraph is a maximal run of non-blank lines, flattened to one string
// with each line followed by a single space. The trailing space after the
// last line is kept, matching the phrase serialization convention.

/// Split text into blank-line-delimited paragraphs.
///
/// A line counts as blank when it is empty after trimming ASCII whitespace
/// (this tolerates a stray `\r` on CRLF input). Consecutive blank lines
/// never produce empty paragraphs, and a final paragraph without a trailing
/// blank line is still emitted.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim_matches(|c: char| c.is_ascii_whitespace()).is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push(' ');
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_paragraphs() {
        let paragraphs = split_paragraphs("a b\n\nc d\n");
        assert_eq!(paragraphs, vec!["a b ", "c d "]);
    }

    #[test]
    fn test_multiline_paragraph_joined_with_spaces() {
        let paragraphs = split_paragraphs("first line\nsecond line\n\nnext");
        assert_eq!(paragraphs, vec!["first line second line ", "next "]);
    }

    #[test]
    fn test_consecutive_blank_lines() {
        let paragraphs = split_paragraphs("a\n\n\n\nb\n");
        assert_eq!(paragraphs, vec!["a ", "b "]);
    }

    #[test]
    fn test_leading_blank_lines_ignored() {
        let paragraphs = split_paragraphs("\n\na\n");
        assert_eq!(paragraphs, vec!["a "]);
    }

    #[test]
    fn test_no_trailing_blank_line() {
        let paragraphs = split_paragraphs("last paragraph");
        assert_eq!(paragraphs, vec!["last paragraph "]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n\n").is_empty());
    }
}
