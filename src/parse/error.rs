use super::context::MAX_DEPTH;
use crate::span::Span;
use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unknown character `{0}` at position {1}")]
    UnexpectedCharacter(char, Span),

    #[error("Unknown keyword `{0}` at position {1}")]
    UnknownKeyword(String, Span),
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter(_, s) => *s,
            LexError::UnknownKeyword(_, s) => *s,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parenthesis at position {0} is not matched")]
    UnmatchedParen(Span),

    #[error("Missing operand, found `{0}` at position {1}")]
    MissingOperand(Token, Span),

    #[error("Unexpected token `{0}` at position {1}")]
    UnexpectedToken(Token, Span),

    #[error("Parse have leftover tokens start with `{0}` at {1}")]
    Unfinished(Token, Span),

    #[error("Expression nests deeper than {} levels at position {}", MAX_DEPTH, .0)]
    TooDeep(Span),

    #[error("Operator `{0}` is not defined")]
    UndefinedOperator(String),

    #[error("Token stream ended without an end marker")]
    Eof,
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        use ParseError::*;
        match self {
            UnmatchedParen(s) => Some(*s),
            MissingOperand(_, s) => Some(*s),
            UnexpectedToken(_, s) => Some(*s),
            Unfinished(_, s) => Some(*s),
            TooDeep(s) => Some(*s),
            UndefinedOperator(_) | Eof => None,
        }
    }

    /// Everything except a table/tokenizer mismatch is a malformed expression.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, ParseError::UndefinedOperator(_))
    }
}
