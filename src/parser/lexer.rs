use log::{debug, warn};

use crate::parser::errors::ParseError;
use crate::parser::token::{Token, TokenKind};
use crate::utils::parse_literal;

/// Splits an expression into tokens, one per call to `next`.
///
/// Whitespace between tokens is skipped. A run of digits is a single
/// `Number` token. After the first error the lexer yields `None`.
#[derive(Debug)]
pub struct Lexer<'src> {
    whole: &'src str,
    rest: &'src str,
    byte: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Self {
        Self {
            whole: input,
            rest: input,
            byte: 0,
        }
    }

    fn number(&mut self, start: usize) -> Result<Token<'src>, ParseError> {
        let tail = &self.whole[start..];
        let len = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        let lexeme = &tail[..len];
        self.byte = start + len;
        self.rest = &self.whole[self.byte..];

        let value = parse_literal(lexeme)?;
        Ok(Token {
            kind: TokenKind::Number(value),
            offset: start,
            lexeme,
        })
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut chars = self.rest.chars();
            let c = chars.next()?;
            let c_at = self.byte;
            let c_str = &self.rest[..c.len_utf8()];

            self.rest = chars.as_str();
            self.byte += c.len_utf8();

            let kind = match c {
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '0'..='9' => {
                    let token = self.number(c_at);
                    if let Ok(t) = &token {
                        debug!("Lexed number '{}' at {}", t.lexeme, t.offset);
                    }
                    return Some(token);
                }
                c if c.is_whitespace() => continue,
                other => {
                    warn!("Unexpected character {:?} at offset {}", other, c_at);
                    self.rest = "";
                    return Some(Err(ParseError::UnexpectedCharacter {
                        found: other,
                        offset: c_at,
                    }));
                }
            };

            return Some(Ok(Token {
                kind,
                offset: c_at,
                lexeme: c_str,
            }));
        }
    }
}

/// Tokenize a whole expression
///
/// # Errors
///
/// Returns the first lexing error encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>, _>>()?;
    debug!("Tokenized '{}' into {} tokens", input, tokens.len());
    Ok(tokens)
}
