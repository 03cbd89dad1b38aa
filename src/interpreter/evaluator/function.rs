use tracing::debug;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        environment::Binding,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Looks up a variable.
    ///
    /// # Errors
    /// - `UnboundVariable` if the name is not bound.
    /// - `NotAValue` if the name is bound to a function.
    pub fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        match self.env.get(name) {
            Some(Binding::Value(value)) => Ok(*value),
            Some(Binding::Callable(_)) => Err(EvalError::NotAValue { name: name.to_owned() }),
            None => Err(EvalError::UnboundVariable { name: name.to_owned() }),
        }
    }

    /// Evaluates a function call.
    ///
    /// Every argument is evaluated first, left to right; only then is the
    /// name looked up and the callable invoked with the argument values.
    ///
    /// # Errors
    /// - Any error raised while evaluating an argument.
    /// - `UnboundFunction` if the name is not bound.
    /// - `NotCallable` if the name is bound to a plain value.
    /// - Any error returned by the callable itself.
    pub fn eval_function_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        match self.env.get(name) {
            Some(Binding::Callable(callable)) => {
                debug!(name, argc = args.len(), "calling function");
                callable.call(&args)
            },
            Some(Binding::Value(_)) => Err(EvalError::NotCallable { name: name.to_owned() }),
            None => Err(EvalError::UnboundFunction { name: name.to_owned() }),
        }
    }
}
