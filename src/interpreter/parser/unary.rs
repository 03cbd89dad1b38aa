use tracing::trace;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseErrorKind,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses a primary expression.
    ///
    /// Dispatches on the character under the cursor:
    /// - `(` starts a parenthesized expression,
    /// - a numeric character starts a number literal,
    /// - a letter or `_` starts an identifier, which becomes a function call
    ///   when followed by `(`,
    /// - `+` or `-` starts a unary expression.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` at the end of input, `UnimplementedSyntax` for
    /// any other leading character, or any error from the selected rule.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let c = self.current_char()?;
        trace!(offset = self.offset(), %c, "parsing primary");

        match c {
            '(' => self.parse_grouping(),
            '+' | '-' => self.parse_unary(),
            c if c.is_numeric() => self.parse_number(),
            c if c.is_alphabetic() || c == '_' => self.parse_identifier_or_function(),
            found => Err(self.error(ParseErrorKind::UnimplementedSyntax { found })),
        }
    }

    /// Parses a unary sign followed by its operand.
    ///
    /// The operand is a full expression, not just a primary, so the sign
    /// applies to everything up to the end of the enclosing group:
    /// `-2 + 3` is `-(2 + 3)`.
    ///
    /// # Errors
    /// `UnimplementedSyntax` if the cursor is not on `+` or `-`, or any error
    /// from the operand.
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        let c = self.current_char()?;
        let op = UnaryOperator::try_from(c).map_err(|found| {
                                                self.error(ParseErrorKind::UnimplementedSyntax { found })
                                            })?;
        self.advance();

        let expr = self.parse_expression()?;
        Ok(Expr::unary(op, expr))
    }

    /// Parses `( expression )`.
    ///
    /// # Errors
    /// `ExpectedClosingBracket` if the inner expression is not followed by
    /// `)`. Running out of input after the inner expression reports this
    /// kind too, rather than `UnexpectedEndOfInput`, so an unclosed group is
    /// named as such.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression()?;

        match self.peek() {
            Some(')') => {
                self.advance();
                Ok(expr)
            },
            _ => Err(self.error(ParseErrorKind::ExpectedClosingBracket)),
        }
    }

    /// Parses an identifier and, if `(` follows, the call it introduces.
    fn parse_identifier_or_function(&mut self) -> ParseResult<Expr> {
        let name = self.parse_identifier();

        match self.peek() {
            Some('(') => self.parse_call(name),
            _ => Ok(Expr::Variable { name }),
        }
    }
}
