//! # tally
//!
//! tally reads arithmetic expressions: it parses text into an abstract syntax
//! tree and evaluates the tree against an environment of values and functions
//! supplied by the caller.
//!
//! The grammar is deliberately small and unusual. There is no operator
//! precedence: every binary operator (`+ - * / %`) has the same priority and
//! associates to the right, so `10 - 3 - 2` is `10 - (3 - 2)`. Whitespace is
//! ignored everywhere, even inside names and numbers.
//!
//! ```
//! use tally::{Environment, Value, parse};
//!
//! let env = Environment::new().with_value("x", 3);
//! let ast = parse("10 - x - 2").unwrap();
//!
//! assert_eq!(ast.evaluate(&env), Ok(Value::Real(9.0)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed variant per grammar construct.
/// - Renders expressions fully parenthesized for inspection.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors and evaluation errors are separate families. Parse errors carry
/// the source text and cursor offset so they can point at the failing
/// character; evaluation errors carry the offending identifier where one is
/// involved.
pub mod error;
/// Ties together scanning, parsing, evaluation and the value types.
///
/// # Responsibilities
/// - Reads source text into an AST.
/// - Evaluates an AST against an environment.
/// - Defines the numeric value type and the environment bindings.
pub mod interpreter;
/// Default bindings for hosts that want the usual math constants and
/// functions.
///
/// Nothing here is global: `prelude::environment()` builds a fresh environment
/// every time it is called, and the evaluator never consults the prelude
/// unless the caller passes that environment in.
pub mod prelude;

use tracing::debug;

pub use crate::{
    ast::Expr,
    error::{Error, EvalError, ParseError},
    interpreter::{
        environment::{Binding, Callable, Environment},
        parser::core::parse,
        value::core::Value,
    },
};

/// Parses and evaluates `source` in one step.
///
/// # Errors
/// [`Error::Parse`] if the text is malformed, [`Error::Eval`] if evaluation
/// fails.
///
/// # Examples
/// ```
/// use tally::{Environment, Error, EvalError, Value, evaluate};
///
/// let env = Environment::new().with_function("max", |args| {
///                                 Ok(args.iter().copied().fold(args[0], |a, b| {
///                                                            if b.as_real() > a.as_real() { b } else { a }
///                                                        }))
///                             });
/// assert_eq!(evaluate("max(1+2, 4)", &env), Ok(Value::Real(4.0)));
///
/// // Unknown variable.
/// let err = evaluate("y", &Environment::new()).unwrap_err();
/// assert_eq!(err, Error::Eval(EvalError::UnboundVariable { name: "y".into() }));
/// ```
pub fn evaluate(source: &str, env: &Environment) -> Result<Value, Error> {
    let ast = parse(source)?;
    debug!(%ast, "parsed");
    Ok(ast.evaluate(env)?)
}
