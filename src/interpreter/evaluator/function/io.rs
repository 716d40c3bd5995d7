use crate::{
    ast::{Ast, Node},
    interpreter::evaluator::core::{EvalResult, Interp},
};

/// `print(value, ...)` — unquoted output, no separators, no newline.
///
/// Arguments producing no value print nothing.
pub fn print(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    for arg in args {
        if let Some(value) = interp.eval_arg(arg, false)? {
            let text = value.dump(false);
            interp.print(&text);
        }
    }
    Ok(None)
}

/// `println(value, ...)` — `print` plus a trailing newline.
pub fn println(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    print(interp, args)?;
    interp.print("\n");
    Ok(None)
}

/// `dump(value, ...)` — quoted output: strings in `"…"` with internal
/// quotes doubled, arrays as `{ e1, e2, … }`.
pub fn dump(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    for arg in args {
        if let Some(value) = interp.eval_arg(arg, false)? {
            let text = value.dump(true);
            interp.print(&text);
        }
    }
    Ok(None)
}

/// `dumpln(value, ...)` / `?` — `dump` plus a trailing newline.
pub fn dumpln(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    dump(interp, args)?;
    interp.print("\n");
    Ok(None)
}

/// `input([message])` — one line from the input hook.
///
/// Prints `<message>? ` (or a bare `? `) as the prompt, reads a line,
/// trims surrounding whitespace and `;`, and returns it as a string. At
/// end of input no value is produced.
pub fn input(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    if args.len() == 1 {
        let prompt = interp.eval_value(&args[0])?;
        let text = prompt.as_str()?.to_string();
        interp.print(&format!("{text}? "));
    } else {
        interp.print("? ");
    }

    match interp.read_line() {
        Some(line) => {
            let trimmed = line
                .trim_matches(|c: char| " \t\r\n\x0c\x0b;".contains(c))
                .to_string();
            if interp.echo_input {
                interp.print(&format!("{trimmed}\n"));
            }
            Ok(Some(Ast::str(trimmed, 0)))
        },
        None => Ok(None),
    }
}
