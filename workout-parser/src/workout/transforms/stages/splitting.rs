//! Line splitting stage

use crate::workout::error::ParseError;
use crate::workout::lexing::{split_lines, SourceLine};
use crate::workout::transforms::Runnable;

/// Splits source text into numbered physical lines.
pub struct LineSplitting;

impl LineSplitting {
    pub fn new() -> Self {
        LineSplitting
    }
}

impl Default for LineSplitting {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<SourceLine>> for LineSplitting {
    fn run(&self, input: String) -> Result<Vec<SourceLine>, ParseError> {
        Ok(split_lines(&input))
    }
}
