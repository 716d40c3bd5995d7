/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree, resolving variable references against the
/// global bindings and dispatching calls to the built-in function library.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, reducing them to values.
/// - Owns the variable map and the print/input hooks.
/// - Reports runtime errors and routes the `break`/`exit` signals.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// integers, strings, identifiers and punctuation symbols, each tagged with
/// its source line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles literals, comments, the fused identifier alphabet, and the
///   `0x7F` end-of-input marker.
/// - Reports lexical errors for characters outside the alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream with a single token of lookahead
/// and constructs the program tree. Identifier disambiguation is
/// binding-sensitive: a name parses as a call exactly when it is a
/// registered function.
///
/// # Responsibilities
/// - Converts tokens into AST nodes (literals, variables, calls, arrays).
/// - Validates the grammar, reporting errors with location info.
pub mod parser;
