//! Document element
//!
//! The root of a parsed workout. It is built once by the assembler and never mutated:
//! fields are private and only read through accessors.
//!
//! `incomplete` is raised when a structural error (an empty or nested repeat block) broke
//! the shape of the tree. The steps that did parse are still present, but callers should
//! not treat the document as a faithful rendition of the source.

use super::duration::{Duration, DurationKind};
use super::step::{Step, StepNode};
use crate::workout::ast::{Decimal, Sport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total length of a workout with repeats multiplied out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TotalDuration {
    Time { seconds: u64 },
    Distance { meters: Decimal },
    /// Time and distance steps both occur; the two totals are kept apart.
    Mixed { seconds: u64, meters: Decimal },
}

impl TotalDuration {
    /// Sum the durations of `steps`, reporting an empty workout in `sport`'s usual unit.
    pub fn of(steps: &[StepNode], sport: Sport) -> Self {
        let mut totals = Totals::default();
        for node in steps {
            totals.add_node(node, 1);
        }
        match (totals.has_time, totals.has_distance) {
            (true, true) => TotalDuration::Mixed {
                seconds: totals.seconds,
                meters: totals.meters,
            },
            (true, false) => TotalDuration::Time {
                seconds: totals.seconds,
            },
            (false, true) => TotalDuration::Distance {
                meters: totals.meters,
            },
            (false, false) => match sport.dominant_duration_kind() {
                DurationKind::Time => TotalDuration::Time { seconds: 0 },
                DurationKind::Distance => TotalDuration::Distance {
                    meters: Decimal::ZERO,
                },
            },
        }
    }

    pub fn seconds(&self) -> Option<u64> {
        match self {
            TotalDuration::Time { seconds } | TotalDuration::Mixed { seconds, .. } => {
                Some(*seconds)
            }
            TotalDuration::Distance { .. } => None,
        }
    }

    pub fn meters(&self) -> Option<Decimal> {
        match self {
            TotalDuration::Distance { meters } | TotalDuration::Mixed { meters, .. } => {
                Some(*meters)
            }
            TotalDuration::Time { .. } => None,
        }
    }
}

#[derive(Default)]
struct Totals {
    seconds: u64,
    meters: Decimal,
    has_time: bool,
    has_distance: bool,
}

impl Totals {
    fn add_node(&mut self, node: &StepNode, multiplier: u64) {
        match node {
            StepNode::Single(step) => match step.duration {
                Duration::Time { seconds } => {
                    self.has_time = true;
                    self.seconds = self
                        .seconds
                        .saturating_add(seconds.saturating_mul(multiplier));
                }
                Duration::Distance { meters } => {
                    self.has_distance = true;
                    self.meters = self
                        .meters
                        .saturating_add(meters.saturating_mul_int(multiplier));
                }
            },
            StepNode::Repeat(repeat) => {
                let multiplier = multiplier.saturating_mul(u64::from(repeat.count()));
                for child in repeat.body() {
                    self.add_node(child, multiplier);
                }
            }
        }
    }
}

impl fmt::Display for TotalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalDuration::Time { seconds } => write!(f, "{seconds}s"),
            TotalDuration::Distance { meters } => write!(f, "{meters}m"),
            TotalDuration::Mixed { seconds, meters } => write!(f, "{seconds}s + {meters}m"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    sport: Sport,
    title: Option<String>,
    steps: Vec<StepNode>,
    notes: Vec<String>,
    incomplete: bool,
    total: TotalDuration,
}

impl Document {
    pub fn new(
        sport: Sport,
        title: Option<String>,
        steps: Vec<StepNode>,
        notes: Vec<String>,
        incomplete: bool,
    ) -> Self {
        let total = TotalDuration::of(&steps, sport);
        Self {
            sport,
            title,
            steps,
            notes,
            incomplete,
            total,
        }
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn steps(&self) -> &[StepNode] {
        &self.steps
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn is_incomplete(&self) -> bool {
        self.incomplete
    }

    pub fn total_duration(&self) -> TotalDuration {
        self.total
    }

    /// Number of single steps as written; a repeat body counts once.
    pub fn step_count(&self) -> usize {
        self.steps
            .iter()
            .map(StepNode::structural_step_count)
            .sum()
    }

    /// Single steps in execution order, with every repeat expanded.
    ///
    /// The iterator is lazy. Its length is [`Document::repetition_count`], which can be far
    /// larger than the document itself, so collect it only when the counts are known small.
    pub fn timeline(&self) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().flat_map(|node| node.executed_steps())
    }

    /// Number of single steps actually executed, the length of [`Document::timeline`].
    /// Computed from the repeat counts, without walking the timeline.
    pub fn repetition_count(&self) -> usize {
        self.steps
            .iter()
            .map(StepNode::executed_step_count)
            .fold(0, usize::saturating_add)
    }
}
