use log::{debug, warn};

use crate::expression::{BinaryOp, Expression};
use crate::parser::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKENS};
use crate::parser::errors::ParseError;
use crate::parser::lexer::tokenize;
use crate::parser::token::{Token, TokenKind};

const EXPECTED_OPERAND: &str = "a number or '('";
const EXPECTED_CLOSE: &str = "')'";
const EXPECTED_OPERATOR: &str = "an operator or end of input";

/// Precedence-climbing parser over a token list
///
/// `*` and `/` bind tighter than `+` and `-`; operators of equal precedence
/// fold left to right. Each parenthesised group is parsed recursively as a
/// complete sub-expression.
pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    depth: usize,
    max_depth: usize,
    max_tokens: usize,
}

impl<'src> Parser<'src> {
    /// # Errors
    ///
    /// Returns an error if the input cannot be tokenized.
    pub fn new(input: &'src str) -> Result<Self, ParseError> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Limit how deeply parentheses may nest
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Limit the number of tokens accepted
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Parse the whole token list into one expression tree
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, over the configured limits, or
    /// not a well formed expression.
    pub fn parse(mut self) -> Result<Expression, ParseError> {
        if self.tokens.is_empty() {
            warn!("Refusing to parse an empty expression");
            return Err(ParseError::EmptyExpression);
        }
        if self.tokens.len() > self.max_tokens {
            warn!(
                "Expression has {} tokens, limit is {}",
                self.tokens.len(),
                self.max_tokens
            );
            return Err(ParseError::TooManyTokens {
                count: self.tokens.len(),
                limit: self.max_tokens,
            });
        }

        let expr = self.parse_binary(BinaryOp::Add.precedence())?;

        if let Some(token) = self.peek() {
            return Err(unexpected(token, EXPECTED_OPERATOR));
        }

        debug!("Parsed expression: {}", expr);
        Ok(expr)
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parse operands joined by operators of at least `min_precedence`
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expression, ParseError> {
        let mut left = self.parse_operand()?;

        while let Some(op) = self.peek().and_then(|t| t.kind.as_operator()) {
            if op.precedence() < min_precedence {
                break;
            }
            self.pos += 1;
            let right = self.parse_binary(op.precedence() + 1)?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_operand(&mut self) -> Result<Expression, ParseError> {
        let Some(token) = self.advance() else {
            return Err(ParseError::UnexpectedEnd {
                expected: EXPECTED_OPERAND,
            });
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Expression::Number(value)),
            TokenKind::LeftParen => self.parse_group(),
            _ => Err(unexpected(&token, EXPECTED_OPERAND)),
        }
    }

    /// Parse the inside of a group whose `(` was just consumed
    fn parse_group(&mut self) -> Result<Expression, ParseError> {
        if self.depth >= self.max_depth {
            warn!("Parentheses nested deeper than {}", self.max_depth);
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        self.depth += 1;
        let inner = self.parse_binary(BinaryOp::Add.precedence())?;
        self.depth -= 1;

        match self.advance() {
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            }) => Ok(inner),
            Some(token) => Err(unexpected(&token, EXPECTED_CLOSE)),
            None => Err(ParseError::UnexpectedEnd {
                expected: EXPECTED_CLOSE,
            }),
        }
    }
}

fn unexpected(token: &Token<'_>, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.lexeme.to_string(),
        offset: token.offset,
        expected,
    }
}

/// Parse an expression with the default limits
///
/// # Errors
///
/// Returns an error if the input cannot be tokenized or parsed.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    Parser::new(input)?.parse()
}
