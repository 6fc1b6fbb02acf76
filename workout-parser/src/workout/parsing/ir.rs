//! Intermediate representation between structuring and resolution

use crate::workout::ast::StepNode;
use crate::workout::token::TokenStream;

/// A step line that has been placed in the tree but not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLine {
    pub number: usize,
    pub tokens: TokenStream,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatBlock {
    /// Line number of the `<n>x` header.
    pub number: usize,
    pub count: u32,
    pub label: Option<String>,
    pub body: Vec<StepLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    Single(StepLine),
    Repeat(RepeatBlock),
}

/// Output of the structurer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockTree {
    pub title: Option<String>,
    pub nodes: Vec<BlockNode>,
    pub notes: Vec<String>,
    /// A structural error broke the shape of the tree.
    pub incomplete: bool,
}

impl BlockTree {
    /// Step lines in the tree, repeat bodies counted once.
    pub fn step_line_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                BlockNode::Single(_) => 1,
                BlockNode::Repeat(repeat) => repeat.body.len(),
            })
            .sum()
    }
}

/// Output of the resolver: the block tree with every step line resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTree {
    pub title: Option<String>,
    pub steps: Vec<StepNode>,
    pub notes: Vec<String>,
    pub incomplete: bool,
}
