//! Line Classification
//!
//! Decides the [`LineType`] of one physical line. The checks run in a fixed order on the
//! text with leading whitespace removed:
//!
//!     1. Blank: nothing left.
//!     2. Title: starts with `#`.
//!     3. Note: starts with `>`; an optional `Notes:` prefix is dropped.
//!     4. Step: starts with `-`; the rest is tokenized.
//!     5. Repeat header: `<n>x` optionally followed by a label.
//!     6. Anything else is a classification error.
//!
//! A line that fails here comes back as [`LineType::Invalid`] together with the diagnostic
//! explaining why.

use crate::workout::ast::Diagnostic;
use crate::workout::error::ClassificationError;
use crate::workout::lexing::base_tokenization::tokenize;
use crate::workout::lexing::line_splitting::SourceLine;
use crate::workout::token::{ClassifiedLine, LineType};
use once_cell::sync::Lazy;
use regex::Regex;

static NOTES_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^notes:\s*").unwrap());

static REPEAT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)[xX](?:\s+(.*))?$").unwrap());

/// Classify one line, returning the diagnostic for a line that had to be dropped.
pub fn classify_line(line: &SourceLine) -> (ClassifiedLine, Option<Diagnostic>) {
    let (kind, diagnostic) = classify_text(line);
    (ClassifiedLine::new(line.number, kind), diagnostic)
}

fn classify_text(line: &SourceLine) -> (LineType, Option<Diagnostic>) {
    let text = line.text.as_str();
    let content = text.trim_start();
    let offset = text.len() - content.len();

    if content.is_empty() {
        return (LineType::Blank, None);
    }

    if let Some(title) = content.strip_prefix('#') {
        let title = title.trim_start_matches('#').trim();
        return (LineType::Title(title.to_string()), None);
    }

    if let Some(note) = content.strip_prefix('>') {
        let note = note.trim();
        let note = NOTES_PREFIX.replace(note, "");
        return (LineType::Note(note.trim_end().to_string()), None);
    }

    if content.starts_with('-') {
        return match tokenize(text, offset + 1) {
            Ok(tokens) => (LineType::Step(tokens), None),
            Err(error) => (
                LineType::Invalid,
                Some(Diagnostic::lexical(line.number, &error)),
            ),
        };
    }

    let content = content.trim_end();
    if let Some(captures) = REPEAT_HEADER.captures(content) {
        let count = captures.get(1).map_or("", |m| m.as_str());
        let label = captures
            .get(2)
            .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|label| !label.is_empty());
        return match count.parse::<u32>() {
            Ok(count) => (LineType::RepeatHeader { count, label }, None),
            Err(_) => (
                LineType::Invalid,
                Some(Diagnostic::classification(
                    line.number,
                    &ClassificationError::MalformedRepeatHeader(content.to_string()),
                )),
            ),
        };
    }

    (
        LineType::Invalid,
        Some(Diagnostic::classification(
            line.number,
            &ClassificationError::UnrecognizedLine(content.to_string()),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::ast::DiagnosticKind;
    use crate::workout::token::Token;
    use rstest::rstest;

    fn kind_of(text: &str) -> LineType {
        classify_line(&SourceLine::new(1, text)).0.kind
    }

    #[rstest]
    #[case("", LineType::Blank)]
    #[case("   \t", LineType::Blank)]
    #[case("# Opener", LineType::Title("Opener".to_string()))]
    #[case("## Opener ", LineType::Title("Opener".to_string()))]
    #[case("> Keep it easy", LineType::Note("Keep it easy".to_string()))]
    #[case("> Notes: Keep it easy", LineType::Note("Keep it easy".to_string()))]
    #[case(">NOTES:spin", LineType::Note("spin".to_string()))]
    #[case("3x", LineType::RepeatHeader { count: 3, label: None })]
    #[case("  10X ", LineType::RepeatHeader { count: 10, label: None })]
    #[case("3x  Main   set", LineType::RepeatHeader { count: 3, label: Some("Main set".to_string()) })]
    #[case("0x", LineType::RepeatHeader { count: 0, label: None })]
    fn test_line_types(#[case] text: &str, #[case] expected: LineType) {
        assert_eq!(kind_of(text), expected);
    }

    #[test]
    fn test_step_line_is_tokenized() {
        match kind_of("  - 1m z4") {
            LineType::Step(tokens) => {
                assert_eq!(tokens[0], (Token::Time(60), 4..6));
                assert_eq!(tokens[1].0, Token::Zone((4, 4)));
            }
            other => panic!("expected step line, got {other:?}"),
        }
    }

    #[test]
    fn test_lexical_error_marks_line_invalid() {
        let (line, diagnostic) = classify_line(&SourceLine::new(7, "- 10 z2"));
        assert_eq!(line.kind, LineType::Invalid);
        let diagnostic = diagnostic.unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::Lexical);
        assert_eq!(diagnostic.line, 7);
        assert_eq!(diagnostic.column, Some(3));
    }

    #[rstest]
    #[case("Warm up 10 minutes")]
    #[case("3xfoo")]
    #[case("* 5m z2")]
    fn test_unrecognized_lines(#[case] text: &str) {
        let (line, diagnostic) = classify_line(&SourceLine::new(2, text));
        assert_eq!(line.kind, LineType::Invalid);
        assert_eq!(
            diagnostic.map(|d| d.kind),
            Some(DiagnosticKind::Classification)
        );
    }

    #[test]
    fn test_oversized_repeat_count() {
        let (line, diagnostic) = classify_line(&SourceLine::new(1, "99999999999x"));
        assert_eq!(line.kind, LineType::Invalid);
        assert_eq!(
            diagnostic.unwrap().message,
            "repeat count in `99999999999x` is too large"
        );
    }

    #[test]
    fn test_title_and_note_bypass_lexing() {
        assert_eq!(kind_of("# 5min 10"), LineType::Title("5min 10".to_string()));
        assert_eq!(kind_of("> 10 x 5min"), LineType::Note("10 x 5min".to_string()));
    }
}
