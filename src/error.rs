/// Parsing errors.
///
/// Defines the syntax errors raised while scanning and parsing source text.
/// Every parse error keeps the full source and the cursor offset so it can be
/// rendered with a caret under the failing character.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an AST:
/// unbound or mismatched identifiers and arithmetic faults such as division by
/// zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::{ParseError, ParseErrorKind};

/// Either a parse error or an evaluation error.
///
/// Returned by [`crate::evaluate`], which runs both phases. The two families
/// are kept apart; this wrapper only forwards to them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
