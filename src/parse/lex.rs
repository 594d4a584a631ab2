use log::debug;

use super::error::LexError;
use crate::operator;
use crate::span::Span;
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexItem {
    pub span: Span,
    pub token: Token,
}

impl LexItem {
    pub fn new(token: Token, span: Span) -> Self {
        LexItem { token, span }
    }
}

/// Split an uppercase expression into tokens, terminated by [`Token::End`].
///
/// Letters are read in maximal runs: `TRUE`/`FALSE` become literals, operator
/// names become operators and a lone letter is a variable. Any other run is
/// an unknown keyword.
pub fn tokenize(input: &str) -> Result<Vec<LexItem>, LexError> {
    let chars: Vec<char> = input.chars().collect();
    let mut curr_offset = 0;
    let mut result = vec![];

    while let Some(&c) = chars.get(curr_offset) {
        if c == '(' {
            result.push(LexItem::new(Token::LParen, Span::one(curr_offset)));
        } else if c == ')' {
            result.push(LexItem::new(Token::RParen, Span::one(curr_offset)));
        } else if c.is_whitespace() {
            // skip
        } else if c.is_ascii_uppercase() {
            result.push(lex_word(&chars, &mut curr_offset)?);
        } else {
            return Err(LexError::UnexpectedCharacter(c, Span::one(curr_offset)));
        }
        curr_offset += 1;
    }

    result.push(LexItem::new(Token::End, Span::one(curr_offset)));

    for li in &result {
        debug!("{} - {:?}", li.span, li.token);
    }

    Ok(result)
}

fn lex_word(chars: &[char], offset: &mut usize) -> Result<LexItem, LexError> {
    let start_offset = *offset;

    while chars
        .get(*offset + 1)
        .is_some_and(char::is_ascii_uppercase)
    {
        *offset += 1;
    }

    let span = Span::new(start_offset, *offset);
    let word: String = chars[start_offset..=*offset].iter().collect();

    let token = match word.as_str() {
        "TRUE" => Token::Literal(true),
        "FALSE" => Token::Literal(false),
        w => match operator::lookup(w) {
            Some(spec) => Token::Operator(spec.name),
            None if span.width() == 1 => Token::Variable(chars[start_offset]),
            None => return Err(LexError::UnknownKeyword(word, span)),
        },
    };

    Ok(LexItem::new(token, span))
}
