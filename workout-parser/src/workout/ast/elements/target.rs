//! Intensity targets
//!
//! A target pairs a metric (what is measured) with a kind (how the bound is expressed):
//! a percentage of threshold, a zone, or absolute watts. Ranges are stored exactly as
//! written, low first, even when `low > high`.
//!
//! `is_ramp` is only ever set by the explicit `ramp` keyword. A range without it is a held
//! band, so `50-55%` means "anywhere between 50 and 55", not "climb from 50 to 55".

use crate::workout::ast::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Power,
    Pace,
    HeartRate,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Power => "power",
            Metric::Pace => "pace",
            Metric::HeartRate => "heart rate",
        })
    }
}

/// What a percentage is taken of: `ftp`, `MMP` or `LTHR` written after the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetBasis {
    Ftp,
    Mmp,
    Lthr,
}

impl TargetBasis {
    /// The metric the basis belongs to.
    pub fn metric(self) -> Metric {
        match self {
            TargetBasis::Ftp | TargetBasis::Mmp => Metric::Power,
            TargetBasis::Lthr => Metric::HeartRate,
        }
    }
}

impl fmt::Display for TargetBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetBasis::Ftp => "ftp",
            TargetBasis::Mmp => "MMP",
            TargetBasis::Lthr => "LTHR",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("zone z{0} is out of range (z1-z7)")]
pub struct ZoneOutOfRange(pub u32);

/// Training zone number, 1 through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ZoneId(u8);

impl ZoneId {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 7;

    pub fn new(value: u32) -> Result<Self, ZoneOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(ZoneId(value as u8))
        } else {
            Err(ZoneOutOfRange(value))
        }
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for ZoneId {
    type Error = ZoneOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ZoneId::new(value)
    }
}

impl From<ZoneId> for u32 {
    fn from(zone: ZoneId) -> Self {
        zone.get()
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "z{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TargetKind {
    PercentRange { low: Decimal, high: Decimal },
    ZoneRange { low: ZoneId, high: ZoneId },
    WattsRange { low: u32, high: u32 },
}

impl TargetKind {
    pub fn percent(low: Decimal, high: Decimal) -> Self {
        TargetKind::PercentRange { low, high }
    }

    /// Build a zone range, rejecting ids outside z1-z7.
    pub fn zones(low: u32, high: u32) -> Result<Self, ZoneOutOfRange> {
        Ok(TargetKind::ZoneRange {
            low: ZoneId::new(low)?,
            high: ZoneId::new(high)?,
        })
    }

    pub fn zone(zone: u32) -> Result<Self, ZoneOutOfRange> {
        Self::zones(zone, zone)
    }

    pub fn watts(low: u32, high: u32) -> Self {
        TargetKind::WattsRange { low, high }
    }

    /// True when both bounds are the same value.
    pub fn is_single_value(&self) -> bool {
        match self {
            TargetKind::PercentRange { low, high } => low == high,
            TargetKind::ZoneRange { low, high } => low == high,
            TargetKind::WattsRange { low, high } => low == high,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::PercentRange { low, high } if low == high => write!(f, "{low}%"),
            TargetKind::PercentRange { low, high } => write!(f, "{low}-{high}%"),
            TargetKind::ZoneRange { low, high } if low == high => write!(f, "{low}"),
            TargetKind::ZoneRange { low, high } => write!(f, "{low}-{high}"),
            TargetKind::WattsRange { low, high } if low == high => write!(f, "{low}W"),
            TargetKind::WattsRange { low, high } => write!(f, "{low}-{high}W"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub metric: Metric,
    pub kind: TargetKind,
    pub is_ramp: bool,
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basis: Option<TargetBasis>,
}

impl Target {
    pub fn new(metric: Metric, kind: TargetKind) -> Self {
        Self {
            metric,
            kind,
            is_ramp: false,
            label: None,
            basis: None,
        }
    }

    pub fn with_ramp(mut self, is_ramp: bool) -> Self {
        self.is_ramp = is_ramp;
        self
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn with_basis(mut self, basis: Option<TargetBasis>) -> Self {
        self.basis = basis;
        self
    }
}
