//! Input size check
//!
//! Runs before anything else so oversized input is rejected without doing any work on it.

use crate::workout::error::ParseError;
use crate::workout::transforms::Runnable;
use crate::workout::ParseOptions;
use log::debug;

pub struct CheckLimits {
    max_lines: usize,
    max_bytes: usize,
}

impl CheckLimits {
    pub fn new(max_lines: usize, max_bytes: usize) -> Self {
        CheckLimits {
            max_lines,
            max_bytes,
        }
    }
}

impl From<&ParseOptions> for CheckLimits {
    fn from(options: &ParseOptions) -> Self {
        Self::new(options.max_lines, options.max_bytes)
    }
}

impl Runnable<String, String> for CheckLimits {
    fn run(&self, input: String) -> Result<String, ParseError> {
        if input.len() > self.max_bytes {
            return Err(ParseError::InputTooLarge {
                measure: "bytes",
                actual: input.len(),
                limit: self.max_bytes,
            });
        }
        let lines = input.lines().count();
        if lines > self.max_lines {
            return Err(ParseError::InputTooLarge {
                measure: "lines",
                actual: lines,
                limit: self.max_lines,
            });
        }
        debug!("input accepted: {} bytes, {} lines", input.len(), lines);
        Ok(input)
    }
}
