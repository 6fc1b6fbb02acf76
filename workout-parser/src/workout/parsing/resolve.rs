//! Target resolution
//!
//! Turns the tokens of one step line into a [`Step`]. The token order on a line is free, so
//! the resolver first sorts every token into its slot and only then checks the slots. Checks
//! run in a fixed order and the first failure is the one reported:
//!
//!     1. no stray repeat marker
//!     2. exactly one duration
//!     3. exactly one intensity (percent, zone or watts)
//!     4. at most one of `Pace` / `HR`
//!     5. at most one basis (`ftp`, `MMP`, `LTHR`), agreeing with `Pace` / `HR`
//!     6. at most one cadence and one `intensity=` class
//!     7. zone ids within z1-z7
//!     8. watts only with the power metric
//!
//! `ramp` is the only thing that makes a target a ramp. Leftover words form the label.

use crate::workout::ast::{
    CadenceRange, Diagnostic, Diagnostics, Duration, IntensityClass, Metric, Repeat, Sport, Step,
    StepFlags, StepNode, Target, TargetBasis, TargetKind,
};
use crate::workout::error::ResolutionError;
use crate::workout::parsing::ir::{BlockNode, BlockTree, ResolvedTree, StepLine};
use crate::workout::token::{Token, TokenStream};

#[derive(Default)]
struct Slots<'a> {
    durations: Vec<Duration>,
    intensities: Vec<&'a Token>,
    cadences: Vec<CadenceRange>,
    classes: Vec<IntensityClass>,
    bases: Vec<TargetBasis>,
    repeat: Option<u32>,
    ramp: bool,
    pace: bool,
    heart_rate: bool,
    flags: StepFlags,
    words: Vec<&'a str>,
}

impl<'a> Slots<'a> {
    fn collect(tokens: &'a TokenStream) -> Self {
        let mut slots = Slots::default();
        for (token, _) in tokens {
            match token {
                Token::Time(seconds) => slots.durations.push(Duration::seconds(*seconds)),
                Token::Distance(meters) => slots.durations.push(Duration::meters(*meters)),
                Token::Percent(_) | Token::Zone(_) | Token::Watts(_) => {
                    slots.intensities.push(token)
                }
                Token::Cadence((low, high)) => slots.cadences.push(CadenceRange {
                    low: *low,
                    high: *high,
                }),
                Token::Intensity(class) => slots.classes.push(*class),
                Token::Repeat(count) => {
                    slots.repeat.get_or_insert(*count);
                }
                Token::Ramp => slots.ramp = true,
                Token::Pace => slots.pace = true,
                Token::HeartRate => slots.heart_rate = true,
                Token::FreeRide => slots.flags.freeride = true,
                Token::MaxEffort => slots.flags.max_effort = true,
                Token::HidePower => slots.flags.hide_power = true,
                Token::Basis(basis) => slots.bases.push(*basis),
                Token::Word(word) => slots.words.push(word),
            }
        }
        slots
    }
}

fn single<T>(
    items: Vec<T>,
    missing: ResolutionError,
    ambiguous: ResolutionError,
) -> Result<T, ResolutionError> {
    if items.len() > 1 {
        return Err(ambiguous);
    }
    items.into_iter().next().ok_or(missing)
}

fn at_most_one<T>(
    items: Vec<T>,
    ambiguous: ResolutionError,
) -> Result<Option<T>, ResolutionError> {
    if items.len() > 1 {
        return Err(ambiguous);
    }
    Ok(items.into_iter().next())
}

/// Resolve one step line for `sport`.
pub fn resolve_step(tokens: &TokenStream, sport: Sport) -> Result<Step, ResolutionError> {
    let slots = Slots::collect(tokens);

    if let Some(count) = slots.repeat {
        return Err(ResolutionError::MisplacedRepeat(count));
    }
    let duration = single(
        slots.durations,
        ResolutionError::MissingDuration,
        ResolutionError::AmbiguousDuration,
    )?;
    let intensity = single(
        slots.intensities,
        ResolutionError::MissingIntensity,
        ResolutionError::AmbiguousIntensity,
    )?;
    if slots.pace && slots.heart_rate {
        return Err(ResolutionError::ConflictingMetric);
    }
    let basis = at_most_one(slots.bases, ResolutionError::AmbiguousBasis)?;
    let cadence = at_most_one(slots.cadences, ResolutionError::AmbiguousCadence)?;
    let class = at_most_one(slots.classes, ResolutionError::AmbiguousIntensityClass)?;

    let keyword_metric = if slots.pace {
        Some(Metric::Pace)
    } else if slots.heart_rate {
        Some(Metric::HeartRate)
    } else {
        None
    };
    if let (Some(basis), Some(metric)) = (basis, keyword_metric) {
        if basis.metric() != metric {
            return Err(ResolutionError::BasisMismatch { basis, metric });
        }
    }
    let explicit_metric = keyword_metric.or(basis.map(TargetBasis::metric));

    let (kind, metric) = match intensity {
        Token::Percent((low, high)) => (
            TargetKind::percent(*low, *high),
            explicit_metric.unwrap_or_else(|| sport.default_metric()),
        ),
        Token::Zone((low, high)) => (
            TargetKind::zones(*low, *high)?,
            explicit_metric.unwrap_or_else(|| sport.default_metric()),
        ),
        Token::Watts((low, high)) => match explicit_metric {
            Some(metric) if metric != Metric::Power => {
                return Err(ResolutionError::WattsWithMetric(metric))
            }
            _ => (TargetKind::watts(*low, *high), Metric::Power),
        },
        _ => return Err(ResolutionError::MissingIntensity),
    };

    let label = Some(slots.words.join(" ")).filter(|label| !label.is_empty());
    let target = Target::new(metric, kind)
        .with_ramp(slots.ramp)
        .with_label(label)
        .with_basis(basis);

    let mut step = Step::new(duration, target);
    step.cadence = cadence;
    step.flags = slots.flags;
    step.intensity = class;
    Ok(step)
}

fn resolve_line(line: &StepLine, sport: Sport, diagnostics: &mut Diagnostics) -> Option<Step> {
    match resolve_step(&line.tokens, sport) {
        Ok(step) => Some(step),
        Err(error) => {
            diagnostics.push(Diagnostic::resolution(line.number, &error));
            None
        }
    }
}

/// Resolve every step line in `tree`, dropping and reporting the ones that fail.
///
/// A repeat whose body lines all fail is dropped along with them.
pub fn resolve_tree(tree: BlockTree, sport: Sport) -> (ResolvedTree, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut steps = Vec::with_capacity(tree.nodes.len());

    for node in &tree.nodes {
        match node {
            BlockNode::Single(line) => {
                if let Some(step) = resolve_line(line, sport, &mut diagnostics) {
                    steps.push(StepNode::Single(step));
                }
            }
            BlockNode::Repeat(block) => {
                let body: Vec<StepNode> = block
                    .body
                    .iter()
                    .filter_map(|line| resolve_line(line, sport, &mut diagnostics))
                    .map(StepNode::Single)
                    .collect();
                if body.is_empty() {
                    continue;
                }
                match Repeat::new(block.count, body, block.label.clone()) {
                    Ok(repeat) => steps.push(StepNode::Repeat(repeat)),
                    Err(error) => diagnostics.push(Diagnostic::structural(block.number, &error)),
                }
            }
        }
    }

    let resolved = ResolvedTree {
        title: tree.title,
        steps,
        notes: tree.notes,
        incomplete: tree.incomplete,
    };
    (resolved, diagnostics)
}
