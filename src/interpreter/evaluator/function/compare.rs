use std::cmp::Ordering;

use crate::{
    ast::{Ast, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interp},
};

/// `compare(value1, value2)` — the language's total order.
///
/// Returns −1, 0 or +1. Values order first by kind (`Int < Str < Array`);
/// within a kind, integers numerically, strings by lexicographic byte
/// order, and arrays element-wise with the same rule, ties broken by
/// length. Every other comparison builtin is a threshold on this order.
pub fn compare(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let ord = compare_args(interp, args)?;
    Ok(Some(Ast::int(ord, args[0].line_number())))
}

/// `equal(value1, value2)` / `==`.
pub fn equal(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    predicate(interp, args, |ord| ord == 0)
}

/// `not_equal(value1, value2)` / `!=`.
pub fn not_equal(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    predicate(interp, args, |ord| ord != 0)
}

/// `less(value1, value2)` / `<`.
pub fn less(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    predicate(interp, args, |ord| ord < 0)
}

/// `less_equal(value1, value2)` / `<=`.
pub fn less_equal(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    predicate(interp, args, |ord| ord <= 0)
}

/// `greater(value1, value2)` / `>`.
pub fn greater(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    predicate(interp, args, |ord| ord > 0)
}

/// `greater_equal(value1, value2)` / `>=`.
pub fn greater_equal(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    predicate(interp, args, |ord| ord >= 0)
}

/// Shared body of the derived predicates: compare, then threshold to 0/1.
fn predicate(
    interp: &mut Interp,
    args: &[Node],
    test: fn(i64) -> bool,
) -> EvalResult<Option<Node>> {
    let ord = compare_args(interp, args)?;
    Ok(Some(Ast::int(i64::from(test(ord)), args[0].line_number())))
}

/// Evaluates both operands (each must produce a value) and compares them.
fn compare_args(interp: &mut Interp, args: &[Node]) -> EvalResult<i64> {
    let v1 = interp.eval_value(&args[0])?;
    let v2 = interp.eval_value(&args[1])?;
    compare_values(&v1, &v2)
}

/// Compares two reduced values under the total order.
///
/// Also used by `find`, `replace` and `remove` for element matching. Kinds
/// that are not values (a `Var` surviving inside a hand-built tree) report
/// a type mismatch.
pub(crate) fn compare_values(a: &Node, b: &Node) -> EvalResult<i64> {
    match a.type_id().cmp(&b.type_id()) {
        Ordering::Less => return Ok(-1),
        Ordering::Greater => return Ok(1),
        Ordering::Equal => {},
    }

    match (a.as_ref(), b.as_ref()) {
        (Ast::Int { value: i1, .. }, Ast::Int { value: i2, .. }) => {
            Ok(ordering_to_int(i1.cmp(i2)))
        },
        (Ast::Str { text: s1, .. }, Ast::Str { text: s2, .. }) => {
            Ok(ordering_to_int(s1.as_bytes().cmp(s2.as_bytes())))
        },
        (Ast::Array { children: c1, .. }, Ast::Array { children: c2, .. }) => {
            for (x, y) in c1.iter().zip(c2.iter()) {
                let ord = compare_values(x, y)?;
                if ord != 0 {
                    return Ok(ord);
                }
            }
            Ok(ordering_to_int(c1.len().cmp(&c2.len())))
        },
        _ => Err(RuntimeError::TypeMismatch { line: a.line_number() }),
    }
}

const fn ordering_to_int(ord: Ordering) -> i64 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
