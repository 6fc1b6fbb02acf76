//! Workout model
//!
//!     The model is a pure value tree: a [`Document`] owns its [`StepNode`]s, a [`Repeat`]
//!     owns its body, and nothing points back up. Every type is `Clone + Eq` and serde
//!     serializable, so two parses of the same text compare equal structurally.
//!
//! Numbers
//!
//!     Distances and percentages are exact [`Decimal`] values. `0.1km` is exactly 100 meters,
//!     never 100.00000000000001.
//!
//! Diagnostics
//!
//!     Problems found while parsing are collected as [`Diagnostic`]s next to the document,
//!     see [`diagnostics`].

pub mod decimal;
pub mod diagnostics;
pub mod elements;
pub mod sport;

pub use decimal::{Decimal, DecimalError};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSeverity, Diagnostics};
pub use elements::{
    CadenceRange, Document, Duration, DurationKind, IntensityClass, Metric, Repeat, Step,
    StepFlags, StepNode, Target, TargetBasis, TargetKind, TotalDuration, ZoneId,
    ZoneOutOfRange,
};
pub use sport::{Sport, UnknownSport};
