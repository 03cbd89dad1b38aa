use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary sign operation on a value.
    ///
    /// `Plus` returns the value unchanged; `Negate` flips its sign, keeping
    /// integers as integers.
    ///
    /// # Errors
    /// `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use tally::{Value, ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Plus, Value::Real(2.5)).unwrap();
    /// assert_eq!(v, Value::Real(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, value) => Ok(value),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg().map(Value::Integer).ok_or(EvalError::Overflow)
            },
            (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
        }
    }
}
