//! Sport context
//!
//! The sport is supplied by the caller, never inferred from the text. It decides the default
//! metric of a step without an explicit `Pace`/`HR` keyword and the unit a workout's total is
//! reported in when it has no steps.

use super::elements::{DurationKind, Metric};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Serializes as the lowercase name; deserializes through [`FromStr`], so every spelling the
/// parser accepts is accepted in configuration files too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sport {
    #[default]
    Bike,
    Run,
    Swim,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sport `{0}` (expected bike, run or swim)")]
pub struct UnknownSport(pub String);

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Bike, Sport::Run, Sport::Swim];

    pub fn default_metric(self) -> Metric {
        match self {
            Sport::Bike => Metric::Power,
            Sport::Run | Sport::Swim => Metric::Pace,
        }
    }

    pub fn dominant_duration_kind(self) -> DurationKind {
        match self {
            Sport::Bike | Sport::Run => DurationKind::Time,
            Sport::Swim => DurationKind::Distance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Bike => "bike",
            Sport::Run => "run",
            Sport::Swim => "swim",
        }
    }
}

impl FromStr for Sport {
    type Err = UnknownSport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bike" | "ride" | "cycle" | "cycling" => Ok(Sport::Bike),
            "run" | "running" => Ok(Sport::Run),
            "swim" | "swimming" => Ok(Sport::Swim),
            _ => Err(UnknownSport(s.to_string())),
        }
    }
}

impl TryFrom<String> for Sport {
    type Error = UnknownSport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_sport() {
        assert_eq!(Sport::Bike.default_metric(), Metric::Power);
        assert_eq!(Sport::Run.default_metric(), Metric::Pace);
        assert_eq!(Sport::Swim.default_metric(), Metric::Pace);
        assert_eq!(Sport::Swim.dominant_duration_kind(), DurationKind::Distance);
        assert_eq!(Sport::Run.dominant_duration_kind(), DurationKind::Time);
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("Ride".parse::<Sport>(), Ok(Sport::Bike));
        assert_eq!(" running ".parse::<Sport>(), Ok(Sport::Run));
        assert_eq!("SWIM".parse::<Sport>(), Ok(Sport::Swim));
        assert_eq!(
            "rowing".parse::<Sport>(),
            Err(UnknownSport("rowing".to_string()))
        );
    }

    #[test]
    fn test_serde_matches_from_str() {
        for text in ["\"Ride\"", "\"cycle\"", "\"Cycling\"", "\"RUN\"", "\"swimming\""] {
            let from_json: Sport = serde_json::from_str(text).unwrap();
            assert_eq!(Ok(from_json), text.trim_matches('"').parse::<Sport>());
        }
        assert!(serde_json::from_str::<Sport>("\"rowing\"").is_err());
        assert_eq!(serde_json::to_string(&Sport::Bike).unwrap(), "\"bike\"");
    }
}
