//! Block structuring
//!
//! A single forward pass with one piece of state: the repeat block currently being
//! collected, if any. Blank lines close an open block. Everything else that is not a step
//! line leaves it open: titles and notes are routed out, and invalid lines (already
//! reported) are skipped without ending the block.
//!
//! Repeats never nest. A header seen while a block is open is reported and dropped, and the
//! open block keeps collecting.

use crate::workout::ast::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::workout::error::{ClassificationError, StructureError};
use crate::workout::parsing::ir::{BlockNode, BlockTree, RepeatBlock, StepLine};
use crate::workout::token::{ClassifiedLine, LineType};

struct OpenRepeat {
    block: RepeatBlock,
    /// Content lines seen, including dropped ones.
    seen_lines: usize,
}

#[derive(Default)]
struct Structurer {
    tree: BlockTree,
    open: Option<OpenRepeat>,
    diagnostics: Diagnostics,
}

impl Structurer {
    fn feed(&mut self, line: ClassifiedLine) {
        let number = line.number;
        match line.kind {
            LineType::Blank => self.close(),
            // A bare `#` carries no title and does not claim the slot.
            LineType::Title(title) if title.is_empty() => {}
            LineType::Title(title) => {
                if self.tree.title.is_none() {
                    self.tree.title = Some(title);
                } else {
                    self.diagnostics.push(Diagnostic::warning(
                        DiagnosticKind::Classification,
                        number,
                        ClassificationError::DuplicateTitle(title).to_string(),
                    ));
                }
            }
            LineType::Note(note) => self.tree.notes.push(note),
            LineType::RepeatHeader { count, label } => match self.open.as_mut() {
                Some(open) => {
                    open.seen_lines += 1;
                    self.tree.incomplete = true;
                    self.diagnostics.push(Diagnostic::structural(
                        number,
                        &StructureError::NestedRepeat { count },
                    ));
                }
                None => {
                    self.open = Some(OpenRepeat {
                        block: RepeatBlock {
                            number,
                            count,
                            label,
                            body: Vec::new(),
                        },
                        seen_lines: 0,
                    });
                }
            },
            LineType::Step(tokens) => {
                let step = StepLine { number, tokens };
                match self.open.as_mut() {
                    Some(open) => {
                        open.seen_lines += 1;
                        open.block.body.push(step);
                    }
                    None => self.tree.nodes.push(BlockNode::Single(step)),
                }
            }
            LineType::Invalid => {
                if let Some(open) = self.open.as_mut() {
                    open.seen_lines += 1;
                }
            }
        }
    }

    fn close(&mut self) {
        let Some(OpenRepeat { block, seen_lines }) = self.open.take() else {
            return;
        };
        if block.count == 0 {
            self.tree.incomplete = true;
            self.diagnostics
                .push(Diagnostic::structural(block.number, &StructureError::ZeroCount));
        } else if seen_lines == 0 {
            self.tree.incomplete = true;
            self.diagnostics.push(Diagnostic::structural(
                block.number,
                &StructureError::EmptyRepeat { count: block.count },
            ));
        } else if !block.body.is_empty() {
            self.tree.nodes.push(BlockNode::Repeat(block));
        }
        // Otherwise every body line was invalid and has been reported already.
    }

    fn finish(mut self) -> (BlockTree, Diagnostics) {
        self.close();
        (self.tree, self.diagnostics)
    }
}

/// Group classified lines into a block tree.
pub fn structure_lines(lines: Vec<ClassifiedLine>) -> (BlockTree, Diagnostics) {
    let mut structurer = Structurer::default();
    for line in lines {
        structurer.feed(line);
    }
    structurer.finish()
}
