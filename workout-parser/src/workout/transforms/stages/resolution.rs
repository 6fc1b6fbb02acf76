//! Target resolution stage

use crate::workout::ast::Sport;
use crate::workout::error::ParseError;
use crate::workout::parsing::{resolve_tree, BlockTree, ResolvedTree};
use crate::workout::transforms::{Runnable, Staged};
use log::debug;

/// Resolves step lines for one sport.
pub struct Resolution {
    sport: Sport,
}

impl Resolution {
    pub fn new(sport: Sport) -> Self {
        Resolution { sport }
    }
}

impl Runnable<Staged<BlockTree>, Staged<ResolvedTree>> for Resolution {
    fn run(&self, input: Staged<BlockTree>) -> Result<Staged<ResolvedTree>, ParseError> {
        let staged = input.map(|tree| resolve_tree(tree, self.sport));
        debug!(
            "resolved {} top-level nodes for {}",
            staged.value.steps.len(),
            self.sport
        );
        Ok(staged)
    }
}
