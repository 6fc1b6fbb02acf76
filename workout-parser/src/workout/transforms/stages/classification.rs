//! Line classification stage
//!
//! Classifies every line and collects the lexical and classification diagnostics.

use crate::workout::ast::Diagnostics;
use crate::workout::error::ParseError;
use crate::workout::lexing::{classify_line, SourceLine};
use crate::workout::token::ClassifiedLine;
use crate::workout::transforms::{Runnable, Staged};
use log::{debug, trace};

pub struct Classification;

impl Classification {
    pub fn new() -> Self {
        Classification
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Vec<SourceLine>, Staged<Vec<ClassifiedLine>>> for Classification {
    fn run(&self, input: Vec<SourceLine>) -> Result<Staged<Vec<ClassifiedLine>>, ParseError> {
        let mut diagnostics = Diagnostics::new();
        let mut lines = Vec::with_capacity(input.len());
        for source in &input {
            let (line, diagnostic) = classify_line(source);
            trace!("line {}: {:?}", line.number, line.kind);
            diagnostics.extend(diagnostic);
            lines.push(line);
        }
        debug!(
            "classified {} lines ({} dropped)",
            lines.len(),
            diagnostics.len()
        );
        Ok(Staged {
            value: lines,
            diagnostics,
        })
    }
}
