/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation engine, the interpreter state (variables,
/// hooks, flags), the text-evaluation boundary and error reporting.
pub mod core;

/// The built-in function library.
///
/// Registry and implementations of the language's fixed set of functions:
/// every operator and statement of EGA is one of these.
pub mod function;
