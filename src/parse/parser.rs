use log::trace;

use super::context::{Context, MAX_DEPTH};
use super::error::ParseError;
use super::lex::LexItem;
use crate::ast::Node;
use crate::operator::{self, OperatorSpec};
use crate::span::Span;
use crate::token::Token;

const LOWEST_PRECEDENCE: u8 = 0;

// a subtree and its depth, so long operator chains are cut off while parsing
type Parsed = (Node, usize);

/// Build the expression tree by precedence climbing.
///
/// The token slice must end with [`Token::End`], as produced by
/// [`tokenize`](super::tokenize). Trees deeper than [`MAX_DEPTH`] are
/// rejected with [`ParseError::TooDeep`].
pub fn parse(items: &[LexItem]) -> Result<Node, ParseError> {
    let mut state = Context::new(items);
    let (node, depth) = parse_expr(&mut state, LOWEST_PRECEDENCE)?;

    let li = state.get_curr()?;
    match li.token {
        Token::End => {
            trace!("{} (depth {})", node, depth);
            Ok(node)
        }
        Token::RParen => Err(ParseError::UnmatchedParen(li.span)),
        _ => Err(ParseError::Unfinished(li.token, li.span)),
    }
}

fn parse_expr(state: &mut Context, min_precedence: u8) -> Result<Parsed, ParseError> {
    state.enter()?;
    let (mut lhs, mut depth) = parse_primary(state)?;

    loop {
        let li = state.get_curr()?;
        let Token::Operator(name) = li.token else {
            break;
        };
        let spec = lookup(name)?;
        if !spec.is_binary() || spec.precedence < min_precedence {
            break;
        }
        state.advance();
        let (rhs, rhs_depth) = parse_expr(state, spec.rhs_precedence())?;
        depth = deepen(depth.max(rhs_depth), li.span)?;
        lhs = Node::binary(spec.name, lhs, rhs);
    }

    state.leave();
    Ok((lhs, depth))
}

fn parse_primary(state: &mut Context) -> Result<Parsed, ParseError> {
    let li = state.get_curr()?;

    match li.token {
        Token::Literal(value) => {
            state.advance();
            Ok((Node::Literal(value), 1))
        }
        Token::Variable(name) => {
            state.advance();
            Ok((Node::Variable(name), 1))
        }
        Token::LParen => parse_group(state),
        Token::Operator(name) => {
            let spec = lookup(name)?;
            if spec.is_binary() {
                return Err(ParseError::MissingOperand(li.token, li.span));
            }
            state.advance();
            // a prefix operator takes only the next primary
            state.enter()?;
            let (operand, depth) = parse_primary(state)?;
            state.leave();
            Ok((Node::unary(spec.name, operand), deepen(depth, li.span)?))
        }
        _ => Err(ParseError::MissingOperand(li.token, li.span)),
    }
}

fn parse_group(state: &mut Context) -> Result<Parsed, ParseError> {
    let open = state.consume_token(Token::LParen)?;
    let parsed = parse_expr(state, LOWEST_PRECEDENCE)?;

    let li = state.get_curr()?;
    match li.token {
        Token::RParen => {
            state.advance();
            Ok(parsed)
        }
        Token::End => Err(ParseError::UnmatchedParen(open.span)),
        _ => Err(ParseError::UnexpectedToken(li.token, li.span)),
    }
}

fn deepen(depth: usize, span: Span) -> Result<usize, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep(span));
    }
    Ok(depth + 1)
}

fn lookup(name: &str) -> Result<&'static OperatorSpec, ParseError> {
    operator::lookup(name).ok_or_else(|| ParseError::UndefinedOperator(name.to_string()))
}
