//! Lexer
//!
//!     Lexing turns the raw document into a sequence of classified lines. The notation is
//!     strictly line based: a line's role is decided by its first non-blank character and
//!     never depends on its neighbours, so every line is handled on its own.
//!
//! The Lexing Pipeline
//!
//!     1. Line splitting. See [line_splitting]. Lines are split on `\n`, a trailing `\r` is
//!        removed and each line keeps its 1-based number.
//!
//!     2. Step tokenization. See [base_tokenization]. Only step lines (`- ...`) are
//!        tokenized, with the logos [`Token`](crate::workout::token::Token) lexer. Token
//!        spans are byte offsets into the physical line so diagnostics can report columns.
//!
//!     3. Line classification. See [line_classification]. Each line becomes one
//!        [`LineType`](crate::workout::token::LineType). Titles and notes bypass the token
//!        lexer entirely.
//!
//!     Problems found here are returned as diagnostics next to the classified line; the line
//!     itself is kept as `Invalid` so block structure is unaffected.

pub mod base_tokenization;
pub mod line_classification;
pub mod line_splitting;

pub use base_tokenization::tokenize;
pub use line_classification::classify_line;
pub use line_splitting::{split_lines, SourceLine};
