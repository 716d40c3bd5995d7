use std::rc::Rc;

use crate::{
    ast::Node,
    interpreter::evaluator::core::{EvalResult, Interp},
};

/// `set(var[, value])` — eager binding.
///
/// The first argument must be a plain variable reference. With two
/// arguments the second is evaluated and the result is bound; the stored
/// value is returned. With one argument the binding is removed. An
/// expression that produces no value also removes the binding, matching the
/// zero-value form.
pub fn set(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let name = args[0].as_var_name()?.to_string();

    if args.len() == 2 {
        let value = interp.eval_arg(&args[1], false)?;
        interp.set_var(&name, value.clone());
        Ok(value)
    } else {
        interp.set_var(&name, None);
        Ok(None)
    }
}

/// `define(var[, expr])` — lazy binding.
///
/// Stores the second argument **unevaluated**; every subsequent read of the
/// variable re-evaluates the stored expression. Returns the stored node.
/// With one argument the binding is removed.
pub fn define(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let name = args[0].as_var_name()?.to_string();

    if args.len() == 2 {
        let expr = Rc::clone(&args[1]);
        interp.set_var(&name, Some(Rc::clone(&expr)));
        Ok(Some(expr))
    } else {
        interp.set_var(&name, None);
        Ok(None)
    }
}
