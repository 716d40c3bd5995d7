use crate::{
    ast::Node,
    interpreter::evaluator::{
        core::{EvalResult, Interp},
        function::{arith, assign, compare, control, convert, io, logic, sequence},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the interpreter and the slice of **unevaluated**
/// argument nodes; it decides which arguments to evaluate and when. This is
/// what lets `if`, the loops, and the binding forms be ordinary library
/// functions. The result is an optional value: many statements produce
/// none.
pub type BuiltinFn = fn(&mut Interp, &[Node]) -> EvalResult<Option<Node>>;

/// One entry of the builtin registry.
///
/// A builtin is registered under one or more names — the language exposes
/// aliases (`+` for `plus`, `==` for `equal`, …) instead of operator
/// precedence. Arity is a closed range checked by the evaluator before
/// dispatch.
pub struct FnDef {
    /// All names this builtin is registered under.
    pub names: &'static [&'static str],
    /// Minimum accepted argument count.
    pub min_args: usize,
    /// Maximum accepted argument count.
    pub max_args: usize,
    /// The handler.
    pub func: BuiltinFn,
    /// One-line usage string shown by `help <name>`.
    pub help: &'static str,
}

/// Defines the builtin registry as a static lookup table.
///
/// Each entry provides:
/// - one or more names separated by `|` (aliases share the entry),
/// - an inclusive arity range,
/// - the usage line,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $($name:literal)|+ => {
                args: [$min:expr, $max:expr],
                help: $help:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Static table of every builtin. Being `static`, the registry is
        /// complete before any parse, which the binding-sensitive parser
        /// relies on.
        pub static BUILTIN_TABLE: &[FnDef] = &[
            $(
                FnDef {
                    names: &[$($name),+],
                    min_args: $min,
                    max_args: $max,
                    func: $func,
                    help: $help,
                },
            )*
        ];
    };
}

builtin_functions! {
    // assignment
    "set" | "=" => {
        args: [1, 2],
        help: "set(var[, value])",
        func: assign::set,
    },
    "define" | ":=" => {
        args: [1, 2],
        help: "define(var[, expr])",
        func: assign::define,
    },

    // type
    "typeid" => {
        args: [1, 1],
        help: "typeid(value)",
        func: convert::typeid,
    },
    "int" => {
        args: [1, 1],
        help: "int(value)",
        func: convert::int,
    },
    "str" => {
        args: [1, 1],
        help: "str(value)",
        func: convert::str,
    },
    "array" => {
        args: [0, 256],
        help: "array(value1[, ...])",
        func: convert::array,
    },

    // control structure
    "if" | "?:" => {
        args: [2, 3],
        help: "if(cond, true_case[, false_case])",
        func: control::if_fn,
    },
    "for" => {
        args: [4, 4],
        help: "for(var, min, max, expr)",
        func: control::for_fn,
    },
    "foreach" => {
        args: [3, 3],
        help: "foreach(var, ary, expr)",
        func: control::foreach,
    },
    "while" => {
        args: [2, 2],
        help: "while(cond, expr)",
        func: control::while_fn,
    },
    "do" => {
        args: [0, 256],
        help: "do(expr, ...)",
        func: control::do_fn,
    },
    "exit" => {
        args: [0, 1],
        help: "exit([value])",
        func: control::exit,
    },
    "break" => {
        args: [0, 0],
        help: "break()",
        func: control::break_fn,
    },

    // comparison
    "equal" | "==" => {
        args: [2, 2],
        help: "equal(value1, value2)",
        func: compare::equal,
    },
    "not_equal" | "!=" => {
        args: [2, 2],
        help: "not_equal(value1, value2)",
        func: compare::not_equal,
    },
    "compare" => {
        args: [2, 2],
        help: "compare(value1, value2)",
        func: compare::compare,
    },
    "less" | "<" => {
        args: [2, 2],
        help: "less(value1, value2)",
        func: compare::less,
    },
    "less_equal" | "<=" => {
        args: [2, 2],
        help: "less_equal(value1, value2)",
        func: compare::less_equal,
    },
    "greater" | ">" => {
        args: [2, 2],
        help: "greater(value1, value2)",
        func: compare::greater,
    },
    "greater_equal" | ">=" => {
        args: [2, 2],
        help: "greater_equal(value1, value2)",
        func: compare::greater_equal,
    },

    // print/input
    "print" => {
        args: [0, 256],
        help: "print(value, ...)",
        func: io::print,
    },
    "println" => {
        args: [0, 256],
        help: "println(value, ...)",
        func: io::println,
    },
    "dump" => {
        args: [0, 256],
        help: "dump(value, ...)",
        func: io::dump,
    },
    "dumpln" | "?" => {
        args: [0, 256],
        help: "dumpln(value, ...)",
        func: io::dumpln,
    },
    "input" => {
        args: [0, 1],
        help: "input([message])",
        func: io::input,
    },

    // arithmetic
    "plus" | "+" => {
        args: [2, 2],
        help: "plus(int1, int2)",
        func: arith::plus,
    },
    "minus" | "-" => {
        args: [1, 2],
        help: "minus(int1[, int2])",
        func: arith::minus,
    },
    "mul" | "*" => {
        args: [2, 2],
        help: "mul(int1, int2)",
        func: arith::mul,
    },
    // "/" cannot be lexed as an identifier; it is still registered, as the
    // original does, and shows up in the help listing.
    "div" | "/" => {
        args: [2, 2],
        help: "div(int1, int2)",
        func: arith::div,
    },
    "mod" | "%" => {
        args: [2, 2],
        help: "mod(int1, int2)",
        func: arith::mod_fn,
    },

    // logical
    "not" | "!" => {
        args: [1, 1],
        help: "not(value)",
        func: logic::not,
    },
    "or" | "||" => {
        args: [2, 2],
        help: "or(value1, value2)",
        func: logic::or,
    },
    "and" | "&&" => {
        args: [2, 2],
        help: "and(value1, value2)",
        func: logic::and,
    },

    // bit operation
    "compl" | "~" => {
        args: [1, 1],
        help: "compl(value)",
        func: logic::compl,
    },
    "bitor" | "|" => {
        args: [2, 2],
        help: "bitor(value1, value2)",
        func: logic::bitor,
    },
    "bitand" | "&" => {
        args: [2, 2],
        help: "bitand(value1, value2)",
        func: logic::bitand,
    },
    "xor" | "^" => {
        args: [2, 2],
        help: "xor(value1, value2)",
        func: logic::xor,
    },

    // array/string manipulation
    "len" => {
        args: [1, 1],
        help: "len(ary_or_str)",
        func: sequence::len,
    },
    "cat" => {
        args: [1, 256],
        help: "cat(ary_or_str_1, ary_or_str_2, ...)",
        func: sequence::cat,
    },
    "at" | "[]" => {
        args: [2, 3],
        help: "at(ary_or_str, index[, value])",
        func: sequence::at,
    },
    "left" => {
        args: [2, 2],
        help: "left(ary_or_str, count)",
        func: sequence::left,
    },
    "right" => {
        args: [2, 2],
        help: "right(ary_or_str, count)",
        func: sequence::right,
    },
    "mid" => {
        args: [3, 4],
        help: "mid(ary_or_str, index, count[, value])",
        func: sequence::mid,
    },
    "find" => {
        args: [2, 2],
        help: "find(ary_or_str, target)",
        func: sequence::find,
    },
    "replace" => {
        args: [3, 3],
        help: "replace(ary_or_str, from, to)",
        func: sequence::replace,
    },
    "remove" => {
        args: [2, 2],
        help: "remove(ary_or_str, target)",
        func: sequence::remove,
    },
}

/// Looks up a builtin by any of its registered names.
///
/// The parser consults this during the parse to decide whether an
/// identifier is a call or a variable reference.
///
/// ## Example
/// ```
/// use ega::interpreter::evaluator::function::core::find_fn;
///
/// assert!(find_fn("plus").is_some());
/// assert!(find_fn("+").is_some());
/// assert!(find_fn("frobnicate").is_none());
/// ```
#[must_use]
pub fn find_fn(name: &str) -> Option<&'static FnDef> {
    BUILTIN_TABLE.iter().find(|def| def.names.contains(&name))
}

/// Collects every registered name, aliases included, in table order.
#[must_use]
pub fn all_fn_names() -> Vec<&'static str> {
    BUILTIN_TABLE
        .iter()
        .flat_map(|def| def.names.iter().copied())
        .collect()
}
