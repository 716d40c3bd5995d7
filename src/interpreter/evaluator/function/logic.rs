use crate::{
    ast::{Ast, Node},
    interpreter::evaluator::core::{EvalResult, Interp},
};

/// `not(value)` / `!`.
pub fn not(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i = interp.eval_value(&args[0])?.as_int()?;
    Ok(Some(Ast::int(i64::from(i == 0), args[0].line_number())))
}

/// `or(value1, value2)` / `||`. Both operands are always evaluated; there
/// is no short-circuit.
pub fn or(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i64::from(i1 != 0 || i2 != 0), args[0].line_number())))
}

/// `and(value1, value2)` / `&&`. Both operands are always evaluated; there
/// is no short-circuit.
pub fn and(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i64::from(i1 != 0 && i2 != 0), args[0].line_number())))
}

/// `compl(value)` / `~` — bitwise complement.
pub fn compl(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i = interp.eval_value(&args[0])?.as_int()?;
    Ok(Some(Ast::int(!i, args[0].line_number())))
}

/// `bitor(value1, value2)` / `|`.
pub fn bitor(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i1 | i2, args[0].line_number())))
}

/// `bitand(value1, value2)` / `&`.
pub fn bitand(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i1 & i2, args[0].line_number())))
}

/// `xor(value1, value2)` / `^`.
pub fn xor(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let i1 = interp.eval_value(&args[0])?.as_int()?;
    let i2 = interp.eval_value(&args[1])?.as_int()?;
    Ok(Some(Ast::int(i1 ^ i2, args[0].line_number())))
}
