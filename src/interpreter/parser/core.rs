use tracing::debug;

use crate::{
    ast::Expr,
    error::{ParseError, ParseErrorKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A character-level recursive descent parser.
///
/// The parser owns a cursor into the source text. It does not tokenize ahead
/// of time: each grammar rule inspects the character under the cursor and
/// consumes characters with [`Parser::advance`], which also skips whitespace.
///
/// Grammar:
/// ```text
///     expression := primary (operator expression)?
///     primary    := "(" expression ")"
///                 | number
///                 | identifier call?
///                 | ("+" | "-") expression
///     call       := "(" (expression ("," expression)*)? ")"
///     operator   := "+" | "-" | "*" | "/" | "%"
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) text:  &'src str,
    pub(in crate::interpreter::parser) chars: Vec<char>,
    pub(in crate::interpreter::parser) index: usize,
}

/// Parses `text` into an expression tree.
///
/// Leading whitespace is skipped, one expression is read, and the whole input
/// must have been consumed.
///
/// # Errors
/// Any [`ParseError`] raised while reading the expression, or
/// `TrailingInput` if characters remain after it.
///
/// # Example
/// ```
/// use tally::{
///     ast::{BinaryOperator, Expr},
///     parse,
/// };
///
/// let ast = parse("1 + x").unwrap();
/// assert_eq!(ast, Expr::binary(Expr::literal(1.0), BinaryOperator::Add, Expr::variable("x")));
///
/// assert!(parse("1 + 2)").is_err());
/// ```
pub fn parse(text: &str) -> ParseResult<Expr> {
    debug!(text, "parsing expression");

    let mut parser = Parser::new(text);
    let expr = parser.parse_expression()?;

    if let Some(found) = parser.peek() {
        return Err(parser.error(ParseErrorKind::TrailingInput { found }));
    }

    Ok(expr)
}

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point of the grammar and the rule every other rule
    /// recurses into. A primary is read first; if an operator follows it, the
    /// rest of the input is parsed as a whole expression and becomes the right
    /// operand. All operators therefore share a single precedence level and
    /// associate to the right: `a - b - c` is `a - (b - c)`.
    ///
    /// # Errors
    /// Any error raised by the primary or by the right operand.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let primary = self.parse_primary()?;
        self.parse_operator_tail(primary)
    }
}
