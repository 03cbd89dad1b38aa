use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Continues an expression after its leading primary.
    ///
    /// If the cursor is on one of `+ - * / %`, the operator is consumed and
    /// [`Parser::parse_binary`] reads the right operand. Otherwise `left` is
    /// the whole expression.
    pub(crate) fn parse_operator_tail(&mut self, left: Expr) -> ParseResult<Expr> {
        if let Some(c) = self.peek()
           && let Ok(op) = BinaryOperator::try_from(c)
        {
            self.advance();
            return self.parse_binary(left, op);
        }

        Ok(left)
    }

    /// Parses the right operand of `op` and joins it with `left`.
    ///
    /// The right operand is a full expression, which is what makes every
    /// operator right-associative.
    ///
    /// # Errors
    /// Any error from the right operand.
    pub fn parse_binary(&mut self, left: Expr, op: BinaryOperator) -> ParseResult<Expr> {
        let right = self.parse_expression()?;
        Ok(Expr::binary(left, op, right))
    }
}
