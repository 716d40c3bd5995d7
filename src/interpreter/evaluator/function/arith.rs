use crate::{
    ast::{Ast, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interp},
};

/// `plus(int1, int2)` / `+`.
pub fn plus(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i1.wrapping_add(i2), args[0].line_number())))
}

/// `minus(int1[, int2])` / `-` — unary negation with one argument.
pub fn minus(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;

    if args.len() == 1 {
        return Ok(Some(Ast::int(i1.wrapping_neg(), args[0].line_number())));
    }

    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i1.wrapping_sub(i2), args[0].line_number())))
}

/// `mul(int1, int2)` / `*`.
pub fn mul(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i1.wrapping_mul(i2), args[0].line_number())))
}

/// `div(int1, int2)` / `/`.
///
/// Division by zero (and the one overflowing quotient) is an illegal
/// operation.
pub fn div(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    let ret = i1
        .checked_div(i2)
        .ok_or(RuntimeError::IllegalOperation { line: args[1].line_number() })?;
    Ok(Some(Ast::int(ret, args[0].line_number())))
}

/// `mod(int1, int2)` / `%`.
///
/// Remainder by zero is an illegal operation.
pub fn mod_fn(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    let ret = i1
        .checked_rem(i2)
        .ok_or(RuntimeError::IllegalOperation { line: args[1].line_number() })?;
    Ok(Some(Ast::int(ret, args[0].line_number())))
}
