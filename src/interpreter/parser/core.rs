use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Ast, Node},
    error::ParseError,
    interpreter::{
        evaluator::function::core::find_fn,
        lexer::Token,
        parser::utils::parse_comma_separated,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. A program is a sequence of
/// expressions, each optionally followed by `;`, running to the end of the
/// token stream.
///
/// Grammar: `program := { expression [ ';' ] } EOF`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The program node containing all parsed expressions.
///
/// # Errors
/// Propagates any error from expression parsing; a stray token that cannot
/// begin an expression is reported there.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    let line = tokens.peek().map_or(1, |(_, l)| *l);
    let mut stmts = Vec::new();

    while tokens.peek().is_some() {
        stmts.push(parse_expression(tokens)?);

        if let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }
    }

    Ok(Rc::new(Ast::Program { stmts, line }))
}

/// Parses a single expression.
///
/// An expression is one of: an integer literal, a string literal, a
/// variable reference, a function call, an array literal, or a
/// parenthesised grouping.
///
/// Disambiguation between variable and call is binding-sensitive: an
/// identifier parses as a call exactly when it names a registered function,
/// in which case the following `(` is required. An unregistered identifier
/// followed by `(` is a syntax error.
///
/// Grammar:
/// ```text
/// expression := INT | STR | var | call | array | paren_call
/// var        := IDENT
/// call       := IDENT '(' [ args ] ')'
/// paren_call := '(' [ args ] ')'
/// array      := '{' [ args ] '}'
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
///
/// # Returns
/// The parsed node, carrying the line of its first token.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    match tokens.next() {
        Some((Token::Int(value), line)) => Ok(Ast::int(*value, *line)),

        Some((Token::Str(text), line)) => Ok(Ast::str(text.clone(), *line)),

        Some((Token::Ident(name), line)) => {
            if find_fn(name).is_some() {
                match tokens.next() {
                    Some((Token::LParen, _)) => parse_call(tokens, name.clone(), *line),
                    Some((tok, line)) => Err(ParseError::UnexpectedToken {
                        token: format!("expected '(' after '{name}', found {tok:?}"),
                        line: *line,
                    }),
                    None => Err(ParseError::UnexpectedEndOfInput { line: *line }),
                }
            } else {
                if let Some((Token::LParen, _)) = tokens.peek() {
                    return Err(ParseError::CallToVariable { name: name.clone(), line: *line });
                }
                Ok(Rc::new(Ast::Var { name: name.clone(), line: *line }))
            }
        },

        Some((Token::LParen, line)) => parse_call(tokens, String::new(), *line),

        Some((Token::LBrace, line)) => parse_array_literal(tokens, *line),

        Some((tok, line)) => Err(ParseError::UnexpectedToken {
            token: format!("{tok:?}"),
            line: *line,
        }),

        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the argument list of a call, the opening `(` already consumed.
///
/// An empty `name` produces the grouping form, which evaluates its
/// arguments in order and yields the last.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `name`: The function name, or `""` for a grouping.
/// - `line`: Line number of the call's first token.
///
/// # Returns
/// A `Call` node with the parsed arguments.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, name: String, line: usize) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    let args = parse_comma_separated(tokens, &Token::RParen)?;

    Ok(Rc::new(Ast::Call { name, args, line }))
}

/// Parses an array literal, the opening `{` already consumed.
///
/// Grammar: `array := '{' [ args ] '}'`. An empty literal `{}` is accepted.
/// Elements stay unevaluated until the node is evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `{`.
/// - `line`: Line number of the `{` token.
///
/// # Returns
/// An `Array` node with the parsed element expressions.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    let children = parse_comma_separated(tokens, &Token::RBrace)?;

    Ok(Rc::new(Ast::Array { children, line }))
}
