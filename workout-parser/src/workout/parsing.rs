//! Parsing
//!
//!     Parsing turns classified lines into the resolved step tree in two stages:
//!
//!         Structuring: See [structure]. Walks the lines in order and groups step lines
//!             under their repeat headers. A repeat block runs from its `<n>x` header to the
//!             next blank line or the end of input. Titles and notes are routed out of the
//!             flow here. The output is a [`BlockTree`](ir::BlockTree) whose step lines are
//!             still unresolved tokens.
//!
//!         Resolution: See [resolve]. Turns each step line's tokens into a
//!             [`Step`](crate::workout::ast::Step) for the caller's sport. A line that does
//!             not describe exactly one duration and one intensity is reported and dropped.
//!
//!     Both stages report problems as diagnostics and keep going; neither can fail a parse.

pub mod ir;
pub mod resolve;
pub mod structure;

pub use ir::{BlockNode, BlockTree, RepeatBlock, ResolvedTree, StepLine};
pub use resolve::{resolve_step, resolve_tree};
pub use structure::structure_lines;
