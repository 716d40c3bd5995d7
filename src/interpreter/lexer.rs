use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// EGA's alphabet is deliberately small: integers, strings, identifiers and
/// six punctuation symbols. Operator spellings (`<=`, `||`, `[]`, `?:`, …)
/// are ordinary identifiers because the identifier character set fuses
/// letters with operator punctuation.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. No sign, no base prefix.
    #[regex(r"[0-9]+", parse_int)]
    Int(i64),
    /// String literal tokens delimited by `"`. Two consecutive `"` inside
    /// the literal denote one literal quote; there are no other escapes.
    #[regex(r#""([^"]|"")*""#, parse_str)]
    Str(String),
    /// Identifier tokens; function or variable names such as `set` or `<=`.
    /// The first character is alphabetic or one of `_+-[]<>=!~*&|%^?:`;
    /// continuation characters add ASCII digits.
    #[regex(
        r"[A-Za-z_+\-\[\]<>=!~*&|%^?:][A-Za-z0-9_+\-\[\]<>=!~*&|%^?:]*",
        |lex| lex.slice().to_string()
    )]
    Ident(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Byte `0x7F` acts as a hard end-of-input marker; everything after it
    /// is ignored.
    #[token("\u{7f}")]
    SubEof,
    /// `@` starts a comment that runs to the end of the line.
    #[regex(r"@[^\n]*", logos::skip)]
    Comment,
    /// Newlines advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\x0b\x0c]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting. Incremented by the
/// newline rule and by the string callback for newlines inside literals.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit an `i64`, which surfaces as a
/// lexical error.
fn parse_int(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Decodes a string literal from the current token slice.
///
/// Strips the surrounding quotes, collapses doubled quotes, and counts any
/// newlines embedded in the literal so line numbers stay accurate.
fn parse_str(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];
    lex.extras.line += inner.bytes().filter(|&b| b == b'\n').count();
    inner.replace("\"\"", "\"")
}

/// Tokenizes a source text into `(token, line)` pairs.
///
/// The end of the returned vector is the end of input; a `0x7F` byte in the
/// source ends tokenization early. Characters outside the language's
/// alphabet produce a syntax error carrying the current line.
///
/// ## Example
/// ```
/// use ega::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("plus(2, 3) @ a comment").unwrap();
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].0, Token::Ident("plus".to_string()));
/// assert_eq!(tokens[1].0, Token::LParen);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::SubEof) => break,
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let slice = lexer.slice();
                let line = lexer.extras.line;
                if slice.starts_with('"') {
                    return Err(ParseError::UnterminatedString { line });
                }
                if slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::UnexpectedToken { token: slice.to_string(), line });
                }
                let ch = slice.chars().next().unwrap_or('\u{0}');
                return Err(ParseError::InvalidCharacter { ch, line });
            },
        }
    }

    Ok(tokens)
}
