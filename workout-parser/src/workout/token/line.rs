//! Classified lines
//!
//! Every physical line of a document is assigned exactly one [`LineType`]. The structurer
//! only ever looks at line types, never at raw text.

use super::core::Token;
use std::ops::Range;

/// Step tokens paired with their byte span in the physical line.
pub type TokenStream = Vec<(Token, Range<usize>)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType {
    /// Empty or whitespace only.
    Blank,
    /// `# text`, with the marker and surrounding whitespace removed.
    Title(String),
    /// `> text`, with the marker and an optional `Notes:` prefix removed.
    Note(String),
    /// `3x` or `3x Main set`.
    RepeatHeader { count: u32, label: Option<String> },
    /// `- ...`, lexed.
    Step(TokenStream),
    /// A line that was reported and dropped. It still counts as content, so it does not
    /// close an open repeat block.
    Invalid,
}

impl LineType {
    pub fn is_blank(&self) -> bool {
        matches!(self, LineType::Blank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// 1-based physical line number.
    pub number: usize,
    pub kind: LineType,
}

impl ClassifiedLine {
    pub fn new(number: usize, kind: LineType) -> Self {
        Self { number, kind }
    }
}
