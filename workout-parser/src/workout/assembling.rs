//! Assembling
//!
//!     The last stage. It wraps the resolved tree into the immutable [`Document`], which
//!     computes the derived totals, and puts the diagnostics from every stage into line order.
//!     Diagnostics on the same line keep stage order: lexical and classification problems
//!     first, then structural, then resolution.

use crate::workout::ast::{Diagnostic, Diagnostics, Document, Sport};
use crate::workout::error::ParseError;
use crate::workout::parsing::ResolvedTree;
use crate::workout::transforms::{Runnable, Staged};
use log::debug;
use serde::{Deserialize, Serialize};

/// The result of a parse: the document and everything reported while building it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutput {
    pub document: Document,
    pub diagnostics: Diagnostics,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Builds the [`Document`] for one sport.
pub struct Assembly {
    sport: Sport,
}

impl Assembly {
    pub fn new(sport: Sport) -> Self {
        Assembly { sport }
    }
}

impl Runnable<Staged<ResolvedTree>, ParseOutput> for Assembly {
    fn run(&self, input: Staged<ResolvedTree>) -> Result<ParseOutput, ParseError> {
        let Staged {
            value: tree,
            mut diagnostics,
        } = input;
        diagnostics.sort_by_line();

        let document = Document::new(
            self.sport,
            tree.title,
            tree.steps,
            tree.notes,
            tree.incomplete,
        );
        debug!(
            "assembled document: {} steps, {} executed, total {}, {} diagnostics",
            document.step_count(),
            document.repetition_count(),
            document.total_duration(),
            diagnostics.len()
        );
        Ok(ParseOutput {
            document,
            diagnostics,
        })
    }
}
