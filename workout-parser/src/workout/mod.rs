//! Main module for workout notation functionality

pub mod assembling;
pub mod ast;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod transforms;

pub use assembling::ParseOutput;
pub use error::ParseError;

use crate::workout::ast::Sport;
use crate::workout::transforms::standard::workout_pipeline;
use serde::{Deserialize, Serialize};

/// Default cap on the number of physical lines accepted by a single parse.
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// Default cap on the byte length of a single document (1 MiB).
pub const DEFAULT_MAX_BYTES: usize = 1024 * 1024;

/// Knobs for a single parse.
///
/// The sport is the only input that changes semantics; the limits bound worst-case work and
/// are checked before any stage runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub sport: Sport,
    pub max_lines: usize,
    pub max_bytes: usize,
}

impl ParseOptions {
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            ..Self::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            sport: Sport::default(),
            max_lines: DEFAULT_MAX_LINES,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Parse a workout document for the given sport with default limits.
///
/// Malformed lines never fail the call; they are reported in
/// [`ParseOutput::diagnostics`]. Only oversized input is rejected.
pub fn parse(source: &str, sport: Sport) -> Result<ParseOutput, ParseError> {
    parse_with_options(source, &ParseOptions::new(sport))
}

/// Parse a workout document with explicit options.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<ParseOutput, ParseError> {
    workout_pipeline(options).run(source.to_string())
}
