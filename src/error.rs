/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code: invalid characters, unterminated strings, unexpected tokens,
/// and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, together
/// with the two unwinding signals (`break`, `exit`) that share the error
/// channel.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error the text-evaluation pipeline can produce.
///
/// Wraps the two phase-specific error types so that a single entry point can
/// report lexer, parser and evaluator failures uniformly.
#[derive(Debug)]
pub enum EgaError {
    /// The source failed to lex or parse.
    Parse(ParseError),
    /// Evaluation failed, or an unwinding signal escaped.
    Eval(RuntimeError),
}

impl EgaError {
    /// The source line attached to this error, or 0 when none is.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Parse(e) => e.line_number(),
            Self::Eval(e) => e.line_number(),
        }
    }
}

impl From<ParseError> for EgaError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EgaError {
    fn from(e: RuntimeError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for EgaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EgaError {}
