use crate::token::Token;

use super::error::ParseError;
use super::lex::LexItem;

/// Deepest nesting the parser descends into, and the deepest tree it builds.
pub const MAX_DEPTH: usize = 256;

pub struct Context<'a> {
    items: &'a [LexItem],
    curr_pos: usize,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [LexItem]) -> Self {
        Self {
            items,
            curr_pos: 0,
            depth: 0,
        }
    }

    pub fn consume_token(&mut self, token: Token) -> Result<LexItem, ParseError> {
        let li = self.get_curr()?;
        if li.token != token {
            return Err(ParseError::UnexpectedToken(li.token, li.span));
        }
        self.advance();
        Ok(li)
    }

    pub fn advance(&mut self) {
        self.curr_pos += 1;
    }

    pub fn get_curr(&self) -> Result<LexItem, ParseError> {
        match self.items.get(self.curr_pos) {
            Some(li) => Ok(*li),
            None => Err(ParseError::Eof),
        }
    }

    // Every `enter` is paired with a `leave` on success; a failed parse
    // drops the whole context.
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep(self.get_curr()?.span));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth -= 1;
    }
}
