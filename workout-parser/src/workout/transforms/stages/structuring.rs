//! Block structuring stage

use crate::workout::error::ParseError;
use crate::workout::parsing::{structure_lines, BlockTree};
use crate::workout::token::ClassifiedLine;
use crate::workout::transforms::{Runnable, Staged};
use log::debug;

pub struct Structuring;

impl Structuring {
    pub fn new() -> Self {
        Structuring
    }
}

impl Default for Structuring {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Staged<Vec<ClassifiedLine>>, Staged<BlockTree>> for Structuring {
    fn run(&self, input: Staged<Vec<ClassifiedLine>>) -> Result<Staged<BlockTree>, ParseError> {
        let staged = input.map(structure_lines);
        let tree = &staged.value;
        debug!(
            "structured {} nodes from {} step lines (incomplete: {})",
            tree.nodes.len(),
            tree.step_line_count(),
            tree.incomplete
        );
        Ok(staged)
    }
}
