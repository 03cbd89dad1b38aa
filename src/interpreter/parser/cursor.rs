use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::parser::core::{ParseResult, Parser},
};

impl<'src> Parser<'src> {
    /// Creates a parser positioned at the first non-whitespace character of
    /// `text`.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        let mut parser = Self { text,
                                chars: text.chars().collect(),
                                index: 0 };
        parser.skip_whitespace();
        parser
    }

    /// Returns `true` while the cursor is within the input.
    #[must_use]
    pub fn has_current(&self) -> bool {
        self.index < self.chars.len()
    }

    /// Returns the character under the cursor.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if the cursor is past the end.
    pub fn current_char(&self) -> ParseResult<char> {
        self.peek()
            .ok_or_else(|| self.error(ParseErrorKind::UnexpectedEndOfInput))
    }

    /// Returns the character under the cursor, or `None` at the end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Moves past the current character and then past any whitespace that
    /// follows it.
    ///
    /// This is the only place whitespace is handled. As a consequence the
    /// cursor never rests on whitespace, and whitespace may appear anywhere,
    /// even inside identifiers and numbers.
    pub fn advance(&mut self) {
        self.index += 1;
        self.skip_whitespace();
    }

    /// The cursor position, counted in characters.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.index
    }

    /// Builds an error of `kind` at the current cursor position.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.text, self.index)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.index += 1;
        }
    }
}
