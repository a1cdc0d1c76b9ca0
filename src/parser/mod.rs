//! Tokenizer and precedence-climbing parser

pub mod constants;
mod core;
mod errors;
mod lexer;
mod token;

pub use self::core::{Parser, parse};
pub use errors::ParseError;
pub use lexer::{Lexer, tokenize};
pub use token::{Token, TokenKind};
