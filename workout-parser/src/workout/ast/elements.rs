//! Workout elements

pub mod document;
pub mod duration;
pub mod step;
pub mod target;

pub use document::{Document, TotalDuration};
pub use duration::{Duration, DurationKind};
pub use step::{CadenceRange, IntensityClass, Repeat, Step, StepFlags, StepNode};
pub use target::{Metric, Target, TargetBasis, TargetKind, ZoneId, ZoneOutOfRange};
