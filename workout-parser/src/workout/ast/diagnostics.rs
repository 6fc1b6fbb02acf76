//! Diagnostics for parse problems
//!
//! Every recoverable problem becomes a [`Diagnostic`]: the offending line is dropped and the
//! parse continues. Diagnostics are ordered by line; problems found on the same line keep the
//! order of the stages that reported them.

use crate::workout::error::{ClassificationError, LexError, ResolutionError, StructureError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// The stage that found the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Lexical,
    Classification,
    Structural,
    Resolution,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticKind::Lexical => "lexical",
            DiagnosticKind::Classification => "classification",
            DiagnosticKind::Structural => "structural",
            DiagnosticKind::Resolution => "resolution",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub kind: DiagnosticKind,
    /// 1-based physical line number.
    pub line: usize,
    /// 1-based character column, when the problem has a precise position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            kind,
            line,
            column: None,
            message: message.into(),
        }
    }

    pub fn warning(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            kind,
            line,
            column: None,
            message: message.into(),
        }
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }

    pub fn lexical(line: usize, error: &LexError) -> Self {
        Self::error(DiagnosticKind::Lexical, line, error.to_string()).with_column(error.column())
    }

    pub fn classification(line: usize, error: &ClassificationError) -> Self {
        Self::error(DiagnosticKind::Classification, line, error.to_string())
    }

    pub fn structural(line: usize, error: &StructureError) -> Self {
        Self::error(DiagnosticKind::Structural, line, error.to_string())
    }

    pub fn resolution(line: usize, error: &ResolutionError) -> Self {
        Self::error(DiagnosticKind::Resolution, line, error.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "line {}:{}: ", self.line, column)?,
            None => write!(f, "line {}: ", self.line)?,
        }
        write!(f, "{}[{}]: {}", self.severity, self.kind, self.message)
    }
}

/// Diagnostics gathered across all stages of one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Order by line number, keeping stage order for diagnostics on the same line.
    pub fn sort_by_line(&mut self) {
        // sort_by_key is stable
        self.0.sort_by_key(|diagnostic| diagnostic.line);
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_column() {
        let err = LexError::UnrecognizedToken {
            text: "5min".to_string(),
            column: 7,
        };
        assert_eq!(
            Diagnostic::lexical(3, &err).to_string(),
            "line 3:7: error[lexical]: unrecognized token `5min`"
        );
        let warning = Diagnostic::warning(DiagnosticKind::Classification, 4, "second title ignored");
        assert_eq!(
            warning.to_string(),
            "line 4: warning[classification]: second title ignored"
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let mut diagnostics: Diagnostics = vec![
            Diagnostic::error(DiagnosticKind::Resolution, 5, "b"),
            Diagnostic::error(DiagnosticKind::Lexical, 2, "a"),
            Diagnostic::error(DiagnosticKind::Structural, 5, "c"),
        ]
        .into_iter()
        .collect();
        diagnostics.sort_by_line();
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_has_errors_ignores_warnings() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::warning(DiagnosticKind::Classification, 1, "w"));
        assert!(!diagnostics.has_errors());
        diagnostics.push(Diagnostic::structural(2, &StructureError::ZeroCount));
        assert!(diagnostics.has_errors());
    }
}
