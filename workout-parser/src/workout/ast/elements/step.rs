//! Step nodes
//!
//! A workout is a sequence of [`StepNode`]s. A `Single` is one interval; a `Repeat` runs its
//! body `count` times. The body holds `StepNode`s rather than `Step`s so nested repeats are
//! representable, even though the notation has no way to write them and the parser rejects
//! them.

use super::duration::Duration;
use super::target::Target;
use crate::workout::error::StructureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;
use std::str::FromStr;

/// Coarse role tag written as `intensity=<class>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityClass {
    Active,
    Rest,
    Warmup,
    Cooldown,
    Recovery,
    Interval,
    Other,
}

impl FromStr for IntensityClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(IntensityClass::Active),
            "rest" => Ok(IntensityClass::Rest),
            "warmup" => Ok(IntensityClass::Warmup),
            "cooldown" => Ok(IntensityClass::Cooldown),
            "recovery" => Ok(IntensityClass::Recovery),
            "interval" => Ok(IntensityClass::Interval),
            "other" => Ok(IntensityClass::Other),
            _ => Err(()),
        }
    }
}

/// Cadence in revolutions (or strides) per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceRange {
    pub low: u32,
    pub high: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepFlags {
    /// Ride without ERG control.
    pub freeride: bool,
    pub max_effort: bool,
    /// Keep the target off the head unit display.
    pub hide_power: bool,
}

/// One interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub duration: Duration,
    pub target: Target,
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<CadenceRange>,
    #[serde(default)]
    pub flags: StepFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<IntensityClass>,
}

impl Step {
    pub fn new(duration: Duration, target: Target) -> Self {
        Self {
            duration,
            label: target.label.clone(),
            target,
            cadence: None,
            flags: StepFlags::default(),
            intensity: None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.duration, self.target.kind)?;
        if self.target.is_ramp {
            f.write_str(" ramp")?;
        }
        if let Some(label) = &self.label {
            write!(f, " {label}")?;
        }
        Ok(())
    }
}

/// A block of steps executed `count` times in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRepeat")]
pub struct Repeat {
    count: u32,
    body: Vec<StepNode>,
    label: Option<String>,
}

#[derive(Deserialize)]
struct RawRepeat {
    count: u32,
    body: Vec<StepNode>,
    #[serde(default)]
    label: Option<String>,
}

impl TryFrom<RawRepeat> for Repeat {
    type Error = StructureError;

    fn try_from(raw: RawRepeat) -> Result<Self, Self::Error> {
        Repeat::new(raw.count, raw.body, raw.label)
    }
}

impl Repeat {
    /// Build a repeat block; the count must be at least 1 and the body non-empty.
    pub fn new(
        count: u32,
        body: Vec<StepNode>,
        label: Option<String>,
    ) -> Result<Self, StructureError> {
        if count == 0 {
            return Err(StructureError::ZeroCount);
        }
        if body.is_empty() {
            return Err(StructureError::EmptyRepeat { count });
        }
        Ok(Self { count, body, label })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn body(&self) -> &[StepNode] {
        &self.body
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum StepNode {
    Single(Step),
    Repeat(Repeat),
}

impl StepNode {
    pub fn as_single(&self) -> Option<&Step> {
        match self {
            StepNode::Single(step) => Some(step),
            StepNode::Repeat(_) => None,
        }
    }

    pub fn as_repeat(&self) -> Option<&Repeat> {
        match self {
            StepNode::Repeat(repeat) => Some(repeat),
            StepNode::Single(_) => None,
        }
    }

    /// Single steps in this node, repeat bodies counted once.
    pub fn structural_step_count(&self) -> usize {
        match self {
            StepNode::Single(_) => 1,
            StepNode::Repeat(repeat) => repeat
                .body
                .iter()
                .map(StepNode::structural_step_count)
                .sum(),
        }
    }

    /// Single steps actually executed, with repeat bodies multiplied out.
    pub fn executed_step_count(&self) -> usize {
        match self {
            StepNode::Single(_) => 1,
            StepNode::Repeat(repeat) => repeat
                .body
                .iter()
                .map(StepNode::executed_step_count)
                .fold(0usize, usize::saturating_add)
                .saturating_mul(repeat.count as usize),
        }
    }

    /// This node's single steps in execution order, produced lazily: a repeat walks its body
    /// `count` times without materializing the copies.
    pub fn executed_steps(&self) -> Box<dyn Iterator<Item = &Step> + '_> {
        match self {
            StepNode::Single(step) => Box::new(iter::once(step)),
            StepNode::Repeat(repeat) => Box::new(
                iter::repeat(&repeat.body)
                    .take(repeat.count as usize)
                    .flat_map(|body| body.iter().flat_map(|node| node.executed_steps())),
            ),
        }
    }
}
