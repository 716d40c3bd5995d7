use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{parse_expression, ParseResult},
    },
};

/// Parses a comma-separated list of expressions until a closing token.
///
/// This production is shared by call argument lists (closing `)`) and array
/// literals (closing `}`). It repeatedly parses one expression, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `args := expression ("," expression)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first element or the
///   closing token.
/// - `closing`: The token that terminates the list (`)` or `}`).
///
/// # Returns
/// A vector of parsed expression nodes.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an element fails to parse,
/// - an unexpected token appears between elements,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I>(
    tokens: &mut Peekable<I>,
    closing: &Token,
) -> ParseResult<Vec<Node>>
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    let mut items = Vec::new();

    if let Some((tok, _)) = tokens.peek() {
        if tok == closing {
            tokens.next();
            return Ok(items);
        }
    }

    loop {
        items.push(parse_expression(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken {
                    token: format!("expected ',' or {closing:?}, found {tok:?}"),
                    line: *line,
                });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(items)
}
