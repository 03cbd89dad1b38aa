/// Describes what went wrong while reading an expression.
///
/// The `Display` text of each kind is the human-readable message shown on the
/// first line of a rendered [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The input ended where a character was still required.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// The characters collected for a number do not form a valid literal.
    #[error("Invalid number literal `{literal}`.")]
    InvalidNumberLiteral {
        /// The offending literal text, exactly as collected.
        literal: String,
    },
    /// A function call was never closed with `)`.
    #[error("Function call was not ended with a closing bracket.")]
    UnterminatedArgumentList,
    /// A function argument was followed by something other than `,` or `)`.
    #[error("Function argument was followed by '{found}' instead of ',' or ')'.")]
    MalformedArgumentSeparator {
        /// The character found after the argument.
        found: char,
    },
    /// A parenthesized expression was not closed with `)`.
    #[error("Expected closing bracket.")]
    ExpectedClosingBracket,
    /// A complete expression was read but characters remain.
    #[error("Unexpected trailing input starting at '{found}'.")]
    TrailingInput {
        /// The first unconsumed character.
        found: char,
    },
    /// No grammar rule starts with this character.
    #[error("Unimplemented syntax: no expression starts with '{found}'.")]
    UnimplementedSyntax {
        /// The character that could not start an expression.
        found: char,
    },
}

/// A syntax error, with enough context to point at the failing character.
///
/// `offset` is a character index into `text`. The `Display` output is three
/// lines: the message, the source prefixed with `| `, and a caret line whose
/// `^` sits exactly under character `offset`.
///
/// # Example
/// ```
/// use tally::{error::ParseErrorKind, parse};
///
/// let err = parse("(1 + )").unwrap_err();
/// assert_eq!(err.offset, 5);
/// assert!(matches!(err.kind, ParseErrorKind::UnimplementedSyntax { found: ')' }));
/// assert_eq!(err.to_string(),
///            "Unimplemented syntax: no expression starts with ')'.\n| (1 + )\n|------^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}\n| {text}\n|-{}^", pointer(.offset))]
pub struct ParseError {
    /// What went wrong.
    pub kind:   ParseErrorKind,
    /// The complete source text being parsed.
    pub text:   String,
    /// Cursor position (in characters) at the time of failure.
    pub offset: usize,
}

impl ParseError {
    /// Creates an error of the given kind at `offset` within `text`.
    pub fn new(kind: ParseErrorKind, text: impl Into<String>, offset: usize) -> Self {
        Self { kind,
               text: text.into(),
               offset }
    }

    /// Returns the bare message, without the source diagram.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

fn pointer(offset: &usize) -> String {
    "-".repeat(*offset)
}
