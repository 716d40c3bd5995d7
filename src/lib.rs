//! # ega
//!
//! EGA is a tiny embeddable scripting language in which every construct —
//! literal, variable reference, control structure, operator — is a function
//! call of the form `name(arg, arg, …)`. Values are integers, strings, or
//! heterogeneous arrays; a fixed library of around fifty built-in functions
//! is the whole of the language.
//!
//! ```
//! use ega::interpreter::evaluator::core::Interp;
//!
//! let mut interp = Interp::new();
//! let value = interp.eval_text("set(i, 0); for(k, 1, 5, set(i, plus(i, k))); i").unwrap();
//! assert_eq!(value.unwrap().as_int().unwrap(), 15);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::Node, error::EgaError, interpreter::evaluator::core::Interp};

/// Defines the structure of parsed code.
///
/// This module declares the `Ast` enum whose variants double as syntax
/// nodes and runtime values, together with the dump formatting and the
/// typed accessors the evaluator relies on.
///
/// # Responsibilities
/// - Defines the six node kinds with a source line on every node.
/// - Renders values in the quoted and unquoted dump formats.
/// - Provides checked access to a node's integer/string/array payload.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code, plus the `break`/`exit` unwinding signals
/// that travel the same channel.
///
/// # Responsibilities
/// - Defines error enums for all failure modes with line numbers attached.
/// - Supplies the top-level `EgaError` for the text-evaluation entry.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the built-in
/// function library to provide a complete runtime for EGA source.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator.
/// - Provides the `Interp` entry points for embedding and driving.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a source text in a fresh interpreter and returns its final value.
///
/// Convenience entry for one-shot execution and for tests; anything that
/// needs persistent bindings, custom hooks or interactive error formatting
/// drives an [`Interp`] directly.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. An `exit`
/// signal surfaces as an error here; use [`Interp::eval_text_ex`] when it
/// must be absorbed.
///
/// # Examples
/// ```
/// use ega::run_script;
///
/// // The final value of the program is returned.
/// let value = run_script("plus(2, 3)").unwrap();
/// assert_eq!(value.unwrap().as_int().unwrap(), 5);
///
/// // 'x' is not bound, so evaluation fails.
/// assert!(run_script("plus(x, 1)").is_err());
/// ```
pub fn run_script(source: &str) -> Result<Option<Node>, EgaError> {
    let mut interp = Interp::new();
    interp.eval_text(source)
}
