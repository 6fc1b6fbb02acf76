//! Composable stage pipelines
//!
//!     A parse is a chain of stages, each implementing [`Runnable`]. [`Transform`] wraps a
//!     chain behind one boxed closure and checks at compile time that each stage's input is
//!     the previous stage's output:
//!
//!         Transform::from_fn(Ok)
//!             .then(LineSplitting::new())
//!             .then(Classification::new())
//!             .then(Structuring::new())
//!
//!     Stages never fail on malformed workout text. Recoverable problems travel alongside the
//!     value in [`Staged`]; the `Err` path is reserved for hard failures such as oversized
//!     input.
//!
//!     Pipelines that do not depend on parse options are built once as `Lazy` statics, see
//!     [standard].

pub mod stages;
pub mod standard;

use crate::workout::ast::{Diagnostic, Diagnostics};
use crate::workout::error::ParseError;

/// A pipeline stage.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, ParseError>;
}

/// A value moving through the pipeline together with the diagnostics reported so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Staged<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> Staged<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Run `f` on the value, appending the diagnostics it reports to the ones so far.
    pub fn map<U, D>(self, f: impl FnOnce(T) -> (U, D)) -> Staged<U>
    where
        D: IntoIterator<Item = Diagnostic>,
    {
        let (value, more) = f(self.value);
        let mut diagnostics = self.diagnostics;
        diagnostics.extend(more);
        Staged { value, diagnostics }
    }
}

/// A chain of stages from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, ParseError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, ParseError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Append a prebuilt static pipeline.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, ParseError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, ParseError> {
        Transform::run(self, input)
    }
}
