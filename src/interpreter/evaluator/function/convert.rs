use crate::{
    ast::{Ast, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interp},
    util::num::len_to_int,
};

/// `typeid(value)` — the integer kind tag of the evaluated argument, or −1
/// when the argument produced no value.
pub fn typeid(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let line = args[0].line_number();
    match interp.eval_arg(&args[0], false)? {
        Some(value) => Ok(Some(Ast::int(value.type_id(), line))),
        None => Ok(Some(Ast::int(-1, line))),
    }
}

/// `int(value)` — conversion to integer.
///
/// Integers pass through; strings are parsed as an optional-signed decimal
/// prefix (an unparseable prefix yields 0); arrays convert to their
/// length.
pub fn int(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    let line = args[0].line_number();

    match value.as_ref() {
        Ast::Int { value, .. } => Ok(Some(Ast::int(*value, line))),
        Ast::Str { text, .. } => Ok(Some(Ast::int(parse_int_prefix(text), line))),
        Ast::Array { children, .. } => Ok(Some(Ast::int(len_to_int(children.len(), line)?, line))),
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `str(value)` — the unquoted dump of the evaluated argument.
pub fn str(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    Ok(Some(Ast::str(value.dump(false), args[0].line_number())))
}

/// `array(value1[, ...])` — an array of the evaluated arguments.
pub fn array(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let mut elements = Vec::with_capacity(args.len());
    for arg in args {
        elements.push(interp.eval_value(arg)?);
    }

    let line = args.first().map_or(0, |arg| arg.line_number());
    Ok(Some(Ast::array(elements, line)))
}

/// Decodes a decimal prefix the way `atoi` does: optional leading
/// whitespace, optional sign, then digits up to the first non-digit.
/// No digits means 0; an overlong prefix saturates.
fn parse_int_prefix(text: &str) -> i64 {
    let bytes = text.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}
