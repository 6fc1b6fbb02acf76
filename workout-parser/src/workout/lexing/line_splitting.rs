//! Line splitting

/// One physical line of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Split `source` into numbered lines.
///
/// `\r\n` and `\n` both end a line and a final line terminator does not start a new empty
/// line.
pub fn split_lines(source: &str) -> Vec<SourceLine> {
    source
        .lines()
        .enumerate()
        .map(|(index, text)| {
            let text = text.strip_suffix('\r').unwrap_or(text);
            SourceLine::new(index + 1, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        let lines = split_lines("# Title\n\n- 5m z2\n");
        assert_eq!(
            lines,
            vec![
                SourceLine::new(1, "# Title"),
                SourceLine::new(2, ""),
                SourceLine::new(3, "- 5m z2"),
            ]
        );
    }

    #[test]
    fn test_carriage_returns_are_removed() {
        let lines = split_lines("3x\r\n- 1m z4\r");
        assert_eq!(lines[0].text, "3x");
        assert_eq!(lines[1].text, "- 1m z4");
    }

    #[test]
    fn test_empty_source() {
        assert!(split_lines("").is_empty());
    }
}
