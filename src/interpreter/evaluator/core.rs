use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks an expression tree against a borrowed environment.
///
/// The evaluator holds no state besides the environment reference; it never
/// modifies the environment or the tree. Operands and arguments are always
/// evaluated left to right, so callables with side effects observe a fixed
/// order.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'env> {
    pub(crate) env: &'env Environment,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator reading bindings from `env`.
    #[must_use]
    pub const fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Dispatches on the node variant: literals, variables, unary and binary
    /// operations, and function calls.
    ///
    /// # Errors
    /// Any [`EvalError`] raised by a lookup, an operator or a callable. The
    /// first error stops evaluation.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        trace!(%expr, "evaluating");

        match expr {
            Expr::Literal { value } => Ok(Value::Real(*value)),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::UnaryOp { op, expr } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
        }
    }
}

impl Expr {
    /// Evaluates this expression against `env`.
    ///
    /// # Errors
    /// Returns an [`EvalError`] for unbound or mismatched identifiers, errors
    /// raised by callables, and arithmetic faults (division by zero, integer
    /// overflow).
    ///
    /// # Example
    /// ```
    /// use tally::{Environment, Value, parse};
    ///
    /// let env = Environment::new().with_value("x", 4);
    /// let ast = parse("x * 2.5").unwrap();
    ///
    /// assert_eq!(ast.evaluate(&env), Ok(Value::Real(10.0)));
    /// ```
    pub fn evaluate(&self, env: &Environment) -> EvalResult<Value> {
        debug!(expr = %self, bindings = env.len(), "evaluating expression");
        Evaluator::new(env).eval(self)
    }
}
