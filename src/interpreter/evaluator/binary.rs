use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic operation on two values.
    ///
    /// Operands are promoted first: if either is real, both are treated as
    /// reals; two integers stay integers.
    ///
    /// - `+`, `-`, `*` are the usual operations. Integer overflow is an error.
    /// - `/` is always true division and yields a real, even for two integers.
    /// - `%` is the truncating remainder: the result takes the sign of the
    ///   dividend (`-7 % 3 == -1`, `7 % -3 == 1`), for integers and reals
    ///   alike.
    /// - A zero divisor for `/` or `%` is an error for both kinds, including
    ///   `-0.0`. Other IEEE-754 special values (infinities, NaN) propagate.
    ///
    /// # Errors
    /// `DivisionByZero` or `Overflow`.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     Value,
    ///     ast::BinaryOperator,
    ///     error::EvalError,
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let v = Evaluator::eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2));
    /// assert_eq!(v, Ok(Value::Real(3.5)));
    ///
    /// let v = Evaluator::eval_binary(BinaryOperator::Mod, Value::Integer(-7), Value::Integer(3));
    /// assert_eq!(v, Ok(Value::Integer(-1)));
    ///
    /// let v = Evaluator::eval_binary(BinaryOperator::Mod, Value::Real(-7.0), Value::Real(3.0));
    /// assert_eq!(v, Ok(Value::Real(-1.0)));
    ///
    /// let v = Evaluator::eval_binary(BinaryOperator::Mod, Value::Real(1.0), Value::Real(0.0));
    /// assert_eq!(v, Err(EvalError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if matches!(op, Div | Mod) && right.is_zero() {
            return Err(EvalError::DivisionByZero);
        }

        match left.promote(right) {
            (Value::Integer(a), Value::Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Mod => a.checked_rem(b),
                    Div => return Ok(Value::Real(left.as_real() / right.as_real())),
                };
                result.map(Value::Integer).ok_or(EvalError::Overflow)
            },
            (left, right) => {
                let (a, b) = (left.as_real(), right.as_real());
                Ok(Value::Real(match op {
                                   Add => a + b,
                                   Sub => a - b,
                                   Mul => a * b,
                                   Div => a / b,
                                   Mod => a % b,
                               }))
            },
        }
    }
}
