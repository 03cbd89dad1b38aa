use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseErrorKind,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses a number literal.
    ///
    /// Greedily collects digits, `_` and `.`, then reads the collected text as
    /// an `f64`. The result is always a real number, even without a
    /// fractional part.
    ///
    /// # Errors
    /// `InvalidNumberLiteral` carrying the collected text if it is not a valid
    /// number (see [`number_from_literal`]).
    pub fn parse_number(&mut self) -> ParseResult<Expr> {
        let mut literal = String::new();
        while let Some(c) = self.peek()
              && is_number_char(c)
        {
            literal.push(c);
            self.advance();
        }
        trace!(%literal, "read number literal");

        number_from_literal(&literal).map(Expr::literal)
                                     .ok_or_else(|| {
                                         self.error(ParseErrorKind::InvalidNumberLiteral { literal })
                                     })
    }

    /// Parses an identifier and returns its name.
    ///
    /// Greedily collects alphanumeric characters and `_`. The name is not
    /// checked against any environment.
    pub fn parse_identifier(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek()
              && (c.is_alphanumeric() || c == '_')
        {
            name.push(c);
            self.advance();
        }
        trace!(%name, "read identifier");

        name
    }

    /// Parses the argument list of a call to `name`.
    ///
    /// The cursor must be on the opening `(`. Arguments are full expressions
    /// separated by `,`; the list may be empty.
    ///
    /// # Errors
    /// - `UnterminatedArgumentList` if the input ends before `)`.
    /// - `MalformedArgumentSeparator` if an argument is followed by anything
    ///   other than `,` or `)`.
    /// - Any error from an argument expression.
    pub fn parse_call(&mut self, name: String) -> ParseResult<Expr> {
        self.advance();

        let mut arguments = Vec::new();
        if self.peek() == Some(')') {
            self.advance();
            return Ok(Expr::FunctionCall { name, arguments });
        }

        loop {
            if !self.has_current() {
                return Err(self.error(ParseErrorKind::UnterminatedArgumentList));
            }
            arguments.push(self.parse_expression()?);

            match self.peek() {
                Some(',') => self.advance(),
                Some(')') => {
                    self.advance();
                    return Ok(Expr::FunctionCall { name, arguments });
                },
                Some(found) => {
                    return Err(self.error(ParseErrorKind::MalformedArgumentSeparator { found }));
                },
                None => return Err(self.error(ParseErrorKind::UnterminatedArgumentList)),
            }
        }
    }
}

const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '_' || c == '.'
}

/// Reads the text collected for a number literal.
///
/// `_` is accepted only between two digits, as a visual separator, and is
/// dropped before conversion. The rest must parse as an `f64`, so `1.`, `.5`
/// and `1_000.25` are valid while `1__0`, `1_`, `1._5` and `1.2.3` are not.
///
/// # Example
/// ```
/// use tally::interpreter::parser::utils::number_from_literal;
///
/// assert_eq!(number_from_literal("1_000.5"), Some(1000.5));
/// assert_eq!(number_from_literal("7"), Some(7.0));
/// assert_eq!(number_from_literal("1__0"), None);
/// assert_eq!(number_from_literal("1.2.3"), None);
/// ```
#[must_use]
pub fn number_from_literal(literal: &str) -> Option<f64> {
    let chars: Vec<char> = literal.chars().collect();

    let separators_valid = chars.iter()
                                .enumerate()
                                .filter(|(_, c)| **c == '_')
                                .all(|(i, _)| {
                                    i > 0
                                    && chars[i - 1].is_ascii_digit()
                                    && chars.get(i + 1).is_some_and(char::is_ascii_digit)
                                });
    if !separators_valid {
        return None;
    }

    literal.replace('_', "").parse::<f64>().ok()
}
