//! The unified string/array manipulation family.
//!
//! Every function here dispatches on the kind of its first evaluated
//! argument: strings are treated as byte sequences (indices, lengths and
//! comparisons are byte-based), arrays as sequences of value handles.
//! Out-of-range indices and counts raise `index out of range`; a byte edit
//! that leaves a string invalid as UTF-8 raises `type mismatch`.

use std::rc::Rc;

use crate::{
    ast::{Ast, Node},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Interp},
        function::compare::compare_values,
    },
    util::num::{int_to_index, len_to_int},
};

/// `len(ary_or_str)` — byte length of a string, element count of an array.
pub fn len(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    let line = args[0].line_number();

    let count = match value.as_ref() {
        Ast::Str { text, .. } => text.len(),
        Ast::Array { children, .. } => children.len(),
        _ => return Err(RuntimeError::TypeMismatch { line }),
    };

    Ok(Some(Ast::int(len_to_int(count, line)?, line)))
}

/// `cat(ary_or_str_1, ary_or_str_2, ...)` — concatenation.
///
/// With a string head, every further argument must evaluate to a string
/// and the pieces are joined. With an array head, every argument is
/// evaluated to an array and the element handles are appended in order.
/// `cat(x)` reproduces `x`.
pub fn cat(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let first = interp.eval_value(&args[0])?;
    let line = args[0].line_number();

    match first.as_ref() {
        Ast::Str { text, .. } => {
            let mut ret = text.clone();
            for arg in &args[1..] {
                let value = interp.eval_value(arg)?;
                ret.push_str(value.as_str()?);
            }
            Ok(Some(Ast::str(ret, line)))
        },
        Ast::Array { children, .. } => {
            let mut elements = children.clone();
            for arg in &args[1..] {
                let value = interp.eval_value(arg)?;
                for element in value.as_array()? {
                    elements.push(interp.eval_value(element)?);
                }
            }
            Ok(Some(Ast::array(elements, line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `at(ary_or_str, index[, value])` — element access and indexed
/// assignment.
///
/// The two-argument form reads: the byte at `index` as an integer for
/// strings, the evaluated element at `index` for arrays. The
/// three-argument form writes: the first argument must then be a variable
/// reference, a new container with position `index` replaced is built and
/// rebound to the variable, and the updated container is returned.
pub fn at(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let container = interp.eval_value(&args[0])?;
    let index_value = interp.eval_value(&args[1])?;
    let index = int_to_index(index_value.as_int()?, args[1].line_number())?;
    let line = args[0].line_number();

    if args.len() == 2 {
        return at_read(interp, &container, index, line);
    }
    at_write(interp, args, &container, index, line)
}

fn at_read(
    interp: &mut Interp,
    container: &Node,
    index: usize,
    line: usize,
) -> EvalResult<Option<Node>> {
    match container.as_ref() {
        Ast::Array { children, .. } => {
            let element = children
                .get(index)
                .ok_or(RuntimeError::IndexOutOfRange { line })?;
            Ok(Some(interp.eval_value(element)?))
        },
        Ast::Str { text, .. } => {
            let byte = text
                .as_bytes()
                .get(index)
                .copied()
                .ok_or(RuntimeError::IndexOutOfRange { line })?;
            Ok(Some(Ast::int(i64::from(byte), line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn at_write(
    interp: &mut Interp,
    args: &[Node],
    container: &Node,
    index: usize,
    line: usize,
) -> EvalResult<Option<Node>> {
    let name = args[0].as_var_name()?.to_string();
    let value = interp.eval_value(&args[2])?;

    match container.as_ref() {
        Ast::Array { children, .. } => {
            if index >= children.len() {
                return Err(RuntimeError::IndexOutOfRange { line });
            }
            let mut elements = children.clone();
            elements[index] = value;
            let array = Ast::array(elements, line);
            interp.set_var(&name, Some(Rc::clone(&array)));
            Ok(Some(array))
        },
        Ast::Str { text, .. } => {
            let mut bytes = text.clone().into_bytes();
            if index >= bytes.len() {
                return Err(RuntimeError::IndexOutOfRange { line });
            }
            bytes[index] = (value.as_int()? & 0xFF) as u8;
            let text = bytes_to_string(bytes, args[2].line_number())?;
            let node = Ast::str(text, line);
            interp.set_var(&name, Some(Rc::clone(&node)));
            Ok(Some(node))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `left(ary_or_str, count)` — the first `count` bytes or elements.
pub fn left(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    let count_value = interp.eval_value(&args[1])?;
    let count_line = args[1].line_number();
    let count = int_to_index(count_value.as_int()?, count_line)?;
    let line = args[0].line_number();

    match value.as_ref() {
        Ast::Str { text, .. } => {
            if count > text.len() {
                return Err(RuntimeError::IndexOutOfRange { line: count_line });
            }
            let text = bytes_to_string(text.as_bytes()[..count].to_vec(), count_line)?;
            Ok(Some(Ast::str(text, line)))
        },
        Ast::Array { children, .. } => {
            if count > children.len() {
                return Err(RuntimeError::IndexOutOfRange { line: count_line });
            }
            Ok(Some(Ast::array(children[..count].to_vec(), line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `right(ary_or_str, count)` — the last `count` bytes or elements.
pub fn right(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    let count_value = interp.eval_value(&args[1])?;
    let count_line = args[1].line_number();
    let count = int_to_index(count_value.as_int()?, count_line)?;
    let line = args[0].line_number();

    match value.as_ref() {
        Ast::Str { text, .. } => {
            if count > text.len() {
                return Err(RuntimeError::IndexOutOfRange { line: count_line });
            }
            let start = text.len() - count;
            let text = bytes_to_string(text.as_bytes()[start..].to_vec(), count_line)?;
            Ok(Some(Ast::str(text, line)))
        },
        Ast::Array { children, .. } => {
            if count > children.len() {
                return Err(RuntimeError::IndexOutOfRange { line: count_line });
            }
            let start = children.len() - count;
            Ok(Some(Ast::array(children[start..].to_vec(), line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `mid(ary_or_str, index, count[, value])` — extraction or replacement of
/// a middle range.
///
/// The three-argument form extracts bytes/elements `[index, index+count)`.
/// The four-argument form replaces that range: in a string the range is
/// replaced by the (arbitrary-length) string `value`; in an array the
/// range is replaced by `value` as a single element.
pub fn mid(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    let index_value = interp.eval_value(&args[1])?;
    let count_value = interp.eval_value(&args[2])?;
    let range_line = args[1].line_number();
    let index = int_to_index(index_value.as_int()?, range_line)?;
    let count = int_to_index(count_value.as_int()?, range_line)?;
    let end = index
        .checked_add(count)
        .ok_or(RuntimeError::IndexOutOfRange { line: range_line })?;
    let line = args[0].line_number();

    if args.len() == 3 {
        return mid_extract(&value, index, end, line, range_line);
    }

    let replacement = interp.eval_value(&args[3])?;
    mid_replace(&value, &replacement, index, end, line, range_line)
}

fn mid_extract(
    value: &Node,
    index: usize,
    end: usize,
    line: usize,
    range_line: usize,
) -> EvalResult<Option<Node>> {
    match value.as_ref() {
        Ast::Str { text, .. } => {
            if end > text.len() {
                return Err(RuntimeError::IndexOutOfRange { line: range_line });
            }
            let text = bytes_to_string(text.as_bytes()[index..end].to_vec(), range_line)?;
            Ok(Some(Ast::str(text, line)))
        },
        Ast::Array { children, .. } => {
            if end > children.len() {
                return Err(RuntimeError::IndexOutOfRange { line: range_line });
            }
            Ok(Some(Ast::array(children[index..end].to_vec(), line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

fn mid_replace(
    value: &Node,
    replacement: &Node,
    index: usize,
    end: usize,
    line: usize,
    range_line: usize,
) -> EvalResult<Option<Node>> {
    match value.as_ref() {
        Ast::Str { text, .. } => {
            if end > text.len() {
                return Err(RuntimeError::IndexOutOfRange { line: range_line });
            }
            let mut bytes = text.as_bytes()[..index].to_vec();
            bytes.extend_from_slice(replacement.as_str()?.as_bytes());
            bytes.extend_from_slice(&text.as_bytes()[end..]);
            let text = bytes_to_string(bytes, range_line)?;
            Ok(Some(Ast::str(text, line)))
        },
        Ast::Array { children, .. } => {
            if end > children.len() {
                return Err(RuntimeError::IndexOutOfRange { line: range_line });
            }
            let mut elements = children[..index].to_vec();
            elements.push(Rc::clone(replacement));
            elements.extend_from_slice(&children[end..]);
            Ok(Some(Ast::array(elements, line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `find(ary_or_str, target)`.
///
/// For strings, the byte index of the first occurrence of the substring;
/// for arrays, the index of the first element comparing equal to the
/// target. −1 when absent.
pub fn find(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let haystack = interp.eval_value(&args[0])?;
    let needle = interp.eval_value(&args[1])?;
    let line = args[0].line_number();

    match haystack.as_ref() {
        Ast::Str { text, .. } => {
            let pos = match text.find(needle.as_str()?) {
                Some(pos) => len_to_int(pos, line)?,
                None => -1,
            };
            Ok(Some(Ast::int(pos, line)))
        },
        Ast::Array { children, .. } => {
            for (i, element) in children.iter().enumerate() {
                if compare_values(element, &needle)? == 0 {
                    return Ok(Some(Ast::int(len_to_int(i, line)?, line)));
                }
            }
            Ok(Some(Ast::int(-1, line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `replace(ary_or_str, from, to)`.
///
/// For strings, replaces every occurrence of the substring `from` with
/// `to`; for arrays, builds a new array where every element comparing
/// equal to `from` is replaced by `to`.
pub fn replace(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    let from = interp.eval_value(&args[1])?;
    let to = interp.eval_value(&args[2])?;
    let line = args[0].line_number();

    match value.as_ref() {
        Ast::Str { text, .. } => {
            let text = text.replace(from.as_str()?, to.as_str()?);
            Ok(Some(Ast::str(text, line)))
        },
        Ast::Array { children, .. } => {
            let mut elements = Vec::with_capacity(children.len());
            for element in children {
                if compare_values(element, &from)? == 0 {
                    elements.push(Rc::clone(&to));
                } else {
                    elements.push(Rc::clone(element));
                }
            }
            Ok(Some(Ast::array(elements, line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// `remove(ary_or_str, target)`.
///
/// For strings, removes every occurrence of the substring; for arrays,
/// builds a new array omitting every element comparing equal to the
/// target.
pub fn remove(interp: &mut Interp, args: &[Node]) -> EvalResult<Option<Node>> {
    let value = interp.eval_value(&args[0])?;
    let target = interp.eval_value(&args[1])?;
    let line = args[0].line_number();

    match value.as_ref() {
        Ast::Str { text, .. } => {
            let text = text.replace(target.as_str()?, "");
            Ok(Some(Ast::str(text, line)))
        },
        Ast::Array { children, .. } => {
            let mut elements = Vec::new();
            for element in children {
                if compare_values(element, &target)? != 0 {
                    elements.push(Rc::clone(element));
                }
            }
            Ok(Some(Ast::array(elements, line)))
        },
        _ => Err(RuntimeError::TypeMismatch { line }),
    }
}

/// Rebuilds a string from edited bytes, rejecting invalid UTF-8.
fn bytes_to_string(bytes: Vec<u8>, line: usize) -> EvalResult<String> {
    String::from_utf8(bytes).map_err(|_| RuntimeError::TypeMismatch { line })
}
