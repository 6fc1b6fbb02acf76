//! Token types shared by the lexer, the classifier and the resolver

pub mod core;
pub mod line;

pub use core::Token;
pub use line::{ClassifiedLine, LineType, TokenStream};
