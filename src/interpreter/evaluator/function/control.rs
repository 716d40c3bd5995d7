use crate::{
    ast::{Ast, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interp},
};

/// `if(cond, true_case[, false_case])`.
///
/// The condition is evaluated as an integer; non-zero selects the second
/// argument, zero selects the third when present. The unselected branch is
/// never evaluated, so its side effects are skipped entirely.
pub fn if_fn(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let cond = interp.eval_value(&args[0])?.as_int()?;

    if cond != 0 {
        interp.eval_arg(&args[1], false)
    } else if args.len() == 3 {
        interp.eval_arg(&args[2], false)
    } else {
        Ok(None)
    }
}

/// `for(var, min, max, expr)`.
///
/// Bounds are evaluated once, before the first iteration. The counter runs
/// from `min` to `max` inclusive, bound as an integer before each body
/// evaluation; `max < min` runs zero times. `break` inside the body stops
/// the loop. Returns the last body result.
pub fn for_fn(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let name = args[0].as_var_name()?.to_string();
    let line = args[0].line_number();
    let lo = interp.eval_value(&args[1])?.as_int()?;
    let hi = interp.eval_value(&args[2])?.as_int()?;

    let mut last = None;
    for i in lo..=hi {
        interp.set_var(&name, Some(Ast::int(i, line)));
        match interp.eval_arg(&args[3], false) {
            Ok(value) => last = value,
            Err(RuntimeError::Break) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(last)
}

/// `foreach(var, ary, expr)`.
///
/// The second argument must evaluate to an array. Each element is bound in
/// turn, exactly as stored, and the body is evaluated. `break` stops the
/// loop. Returns the last body result.
pub fn foreach(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let name = args[0].as_var_name()?.to_string();
    let array = interp.eval_value(&args[1])?;
    let elements = array.as_array()?.to_vec();

    let mut last = None;
    for element in elements {
        interp.set_var(&name, Some(element));
        match interp.eval_arg(&args[2], false) {
            Ok(value) => last = value,
            Err(RuntimeError::Break) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(last)
}

/// `while(cond, expr)`.
///
/// The condition is re-evaluated before every iteration and must produce an
/// integer; the loop runs while it is non-zero. `break` inside the body
/// stops the loop. Returns the last body result.
pub fn while_fn(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let mut last = None;
    loop {
        let cond = interp.eval_value(&args[0])?.as_int()?;
        if cond == 0 {
            break;
        }

        match interp.eval_arg(&args[1], false) {
            Ok(value) => last = value,
            Err(RuntimeError::Break) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(last)
}

/// `do(expr, ...)` — sequencing that absorbs `break`.
///
/// Evaluates its arguments left-to-right and returns the last result.
/// Unlike the parenthesised grouping, `break` stops the sequence here.
pub fn do_fn(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let mut last = None;
    for arg in args {
        match interp.eval_arg(arg, false) {
            Ok(value) => last = value,
            Err(RuntimeError::Break) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(last)
}

/// `exit([value])` — unwinds to the text-evaluation boundary.
///
/// The optional argument is carried unevaluated; the boundary evaluates and
/// prints it once.
pub fn exit(_interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    Err(RuntimeError::Exit { arg: args.first().cloned() })
}

/// `break()` — unwinds to the innermost loop or `do`.
pub fn break_fn(_interp: &mut Interp, _args: &[Node]) -> EvalResult<Option<Node>> {
    Err(RuntimeError::Break)
}
