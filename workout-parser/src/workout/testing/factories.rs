//! Token factories for resolver and structurer tests

use crate::workout::ast::Decimal;
use crate::workout::lexing::tokenize;
use crate::workout::parsing::StepLine;
use crate::workout::token::{Token, TokenStream};

/// Lex step text (without the `-` marker), panicking on a lexical error.
pub fn tokens(text: &str) -> TokenStream {
    tokenize(text, 0).unwrap_or_else(|e| panic!("`{text}` failed to lex: {e}"))
}

/// A step line at `number` built from step text.
pub fn step_line(number: usize, text: &str) -> StepLine {
    StepLine {
        number,
        tokens: tokens(text),
    }
}

/// Tokens with placeholder spans, for tests that only care about token kinds.
pub fn stream(tokens: Vec<Token>) -> TokenStream {
    tokens.into_iter().map(|token| (token, 0..0)).collect()
}

pub fn time(seconds: u64) -> Token {
    Token::Time(seconds)
}

pub fn meters(text: &str) -> Token {
    Token::Distance(decimal(text))
}

pub fn percent(low: &str, high: &str) -> Token {
    Token::Percent((decimal(low), decimal(high)))
}

pub fn zone(low: u32, high: u32) -> Token {
    Token::Zone((low, high))
}

pub fn word(text: &str) -> Token {
    Token::Word(text.to_string())
}

fn decimal(text: &str) -> Decimal {
    text.parse()
        .unwrap_or_else(|e| panic!("bad decimal in token factory: {e}"))
}
