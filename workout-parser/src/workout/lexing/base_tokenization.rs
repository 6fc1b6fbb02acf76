//! Step tokenization
//!
//! Runs the logos lexer over the text of one step line. Only the first problem on a line is
//! reported: once a word fails to lex the whole line is dropped, so later errors would only
//! add noise.

use crate::workout::error::LexError;
use crate::workout::token::{Token, TokenStream};
use logos::Logos;

/// Tokenize `line[offset..]`.
///
/// Spans in the result, and columns in errors, refer to the whole physical `line`.
pub fn tokenize(line: &str, offset: usize) -> Result<TokenStream, LexError> {
    let mut lexer = Token::lexer(&line[offset..]);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let span = (span.start + offset)..(span.end + offset);
        match result {
            Ok(Token::Word(word)) if word.starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(digit_word_error(word, column_of(line, span.start)));
            }
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(LexError::UnrecognizedToken {
                    text: line[span.clone()].to_string(),
                    column: column_of(line, span.start),
                });
            }
        }
    }

    Ok(tokens)
}

/// A word starting with a digit was meant as a value. A plain number lacks its unit;
/// anything else is an unknown shape such as `5min`.
fn digit_word_error(text: String, column: usize) -> LexError {
    if text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        LexError::MissingUnit { text, column }
    } else {
        LexError::UnrecognizedToken { text, column }
    }
}

/// 1-based character column of a byte offset.
pub fn column_of(line: &str, byte: usize) -> usize {
    line[..byte].chars().count() + 1
}
