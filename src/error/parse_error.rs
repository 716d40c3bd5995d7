#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant is a `syntax error` in the language's taxonomy; the
/// variants exist to give the message some precision. The line number is
/// reported separately by the text-evaluation boundary, so `Display`
/// renders the message alone.
pub enum ParseError {
    /// The lexer met a character outside the language's alphabet.
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was still open at the end of input.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token the grammar does not allow at this position.
    UnexpectedToken {
        /// A description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input while a production was incomplete.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier that is not a registered function was called.
    CallToVariable {
        /// The identifier that was followed by `(`.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line attached to this error.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::CallToVariable { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { ch, line: _ } => {
                write!(f, "syntax error: invalid character '{ch}'")
            },
            Self::UnterminatedString { .. } => {
                write!(f, "syntax error: unterminated string")
            },
            Self::UnexpectedToken { token, .. } => {
                write!(f, "syntax error: unexpected token: {token}")
            },
            Self::UnexpectedEndOfInput { .. } => {
                write!(f, "syntax error: unexpected end of input")
            },
            Self::CallToVariable { name, .. } => {
                write!(f, "syntax error: '{name}' is not a function")
            },
        }
    }
}

impl std::error::Error for ParseError {}
