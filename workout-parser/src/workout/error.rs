//! Error types for every pipeline stage
//!
//! Only [`ParseError`] ever escapes a parse. The other enums describe line-level problems;
//! their `Display` output is the message carried by the resulting
//! [`Diagnostic`](crate::workout::ast::Diagnostic).

use crate::workout::ast::{Metric, TargetBasis, ZoneOutOfRange};
use thiserror::Error;

/// Hard failures of a whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input exceeded a defensive size limit and was not parsed at all.
    #[error("input too large: {actual} {measure} exceeds the limit of {limit}")]
    InputTooLarge {
        measure: &'static str,
        actual: usize,
        limit: usize,
    },
    /// A custom pipeline stage failed.
    #[error("stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

/// Unrecognized token shapes inside a step line.
///
/// Columns are 1-based character positions in the physical line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unrecognized token `{text}`")]
    UnrecognizedToken { text: String, column: usize },
    #[error("`{text}` is missing a unit (expected h, m, s, km, kms or mtr)")]
    MissingUnit { text: String, column: usize },
}

impl LexError {
    pub fn column(&self) -> usize {
        match self {
            LexError::UnrecognizedToken { column, .. } | LexError::MissingUnit { column, .. } => {
                *column
            }
        }
    }
}

/// Lines that match none of the known line shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("unrecognized line `{0}`: expected `- <step>`, `<n>x`, `# <title>` or `> <note>`")]
    UnrecognizedLine(String),
    #[error("repeat count in `{0}` is too large")]
    MalformedRepeatHeader(String),
    /// Reported as a warning; the first title is kept.
    #[error("additional title `{0}` ignored")]
    DuplicateTitle(String),
}

/// Problems with the shape of the step tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("repeat block `{count}x` has no steps")]
    EmptyRepeat { count: u32 },
    #[error("nested repeat blocks are not supported: `{count}x` ignored inside an open repeat")]
    NestedRepeat { count: u32 },
    #[error("repeat count must be at least 1")]
    ZeroCount,
}

/// A step line whose tokens do not describe a single interval.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("step missing duration")]
    MissingDuration,
    #[error("step has ambiguous duration")]
    AmbiguousDuration,
    #[error("step missing intensity")]
    MissingIntensity,
    #[error("step has ambiguous intensity")]
    AmbiguousIntensity,
    #[error(transparent)]
    ZoneOutOfRange(#[from] ZoneOutOfRange),
    #[error("conflicting metric keywords `Pace` and `HR`")]
    ConflictingMetric,
    #[error("absolute watts target cannot use the {0} metric")]
    WattsWithMetric(Metric),
    #[error("step has more than one target basis (`ftp`, `MMP` or `LTHR`)")]
    AmbiguousBasis,
    #[error("`{basis}` does not apply to the {metric} metric")]
    BasisMismatch { basis: TargetBasis, metric: Metric },
    #[error("step has more than one cadence")]
    AmbiguousCadence,
    #[error("step has more than one `intensity=` class")]
    AmbiguousIntensityClass,
    #[error("repeat marker `{0}x` is not allowed inside a step")]
    MisplacedRepeat(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ResolutionError::MissingDuration.to_string(),
            "step missing duration"
        );
        assert_eq!(
            StructureError::EmptyRepeat { count: 3 }.to_string(),
            "repeat block `3x` has no steps"
        );
        assert_eq!(
            ResolutionError::from(ZoneOutOfRange(8)).to_string(),
            "zone z8 is out of range (z1-z7)"
        );
        assert_eq!(
            ResolutionError::WattsWithMetric(Metric::Pace).to_string(),
            "absolute watts target cannot use the pace metric"
        );
        assert_eq!(
            ResolutionError::BasisMismatch {
                basis: TargetBasis::Lthr,
                metric: Metric::Power
            }
            .to_string(),
            "`LTHR` does not apply to the power metric"
        );
    }

    #[test]
    fn test_input_too_large_message() {
        let err = ParseError::InputTooLarge {
            measure: "lines",
            actual: 12,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "input too large: 12 lines exceeds the limit of 10"
        );
    }

    #[test]
    fn test_lex_error_column() {
        let err = LexError::MissingUnit {
            text: "10".to_string(),
            column: 3,
        };
        assert_eq!(err.column(), 3);
    }
}
