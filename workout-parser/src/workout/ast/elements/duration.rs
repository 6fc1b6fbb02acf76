//! Step durations
//!
//! A step lasts either a span of time or a distance. Bike and run workouts are written in
//! time by convention and swims in distance, but nothing stops a document from mixing them.

use crate::workout::ast::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Duration {
    Time { seconds: u64 },
    Distance { meters: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationKind {
    Time,
    Distance,
}

impl Duration {
    pub fn seconds(seconds: u64) -> Self {
        Duration::Time { seconds }
    }

    pub fn meters(meters: Decimal) -> Self {
        Duration::Distance { meters }
    }

    pub fn kind(&self) -> DurationKind {
        match self {
            Duration::Time { .. } => DurationKind::Time,
            Duration::Distance { .. } => DurationKind::Distance,
        }
    }

    pub fn as_seconds(&self) -> Option<u64> {
        match self {
            Duration::Time { seconds } => Some(*seconds),
            Duration::Distance { .. } => None,
        }
    }

    pub fn as_meters(&self) -> Option<Decimal> {
        match self {
            Duration::Distance { meters } => Some(*meters),
            Duration::Time { .. } => None,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Time { seconds } => write!(f, "{seconds}s"),
            Duration::Distance { meters } => write!(f, "{meters}m"),
        }
    }
}
