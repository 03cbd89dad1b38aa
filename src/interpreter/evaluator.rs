/// Core evaluation logic.
///
/// Contains the `Evaluator`, the dispatch over expression variants, and
/// `Expr::evaluate`.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the `+` and `-` signs.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+ - * / %` with numeric promotion and the arithmetic fault
/// checks.
pub mod binary;

/// Variable lookup and function calls.
///
/// Resolves identifiers against the environment and reports unbound or
/// mismatched bindings.
pub mod function;
