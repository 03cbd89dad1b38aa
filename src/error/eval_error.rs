/// Represents all errors that can occur while evaluating a parsed expression.
///
/// Errors that concern a binding carry the identifier name so the caller can
/// report which name was at fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A variable was referenced that the environment does not bind.
    #[error("Unknown variable '{name}'.")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// A function was called that the environment does not bind.
    #[error("Unknown function '{name}'.")]
    UnboundFunction {
        /// The name of the function.
        name: String,
    },
    /// A name bound to a plain value was used as a function.
    #[error("'{name}' is a value and cannot be called.")]
    NotCallable {
        /// The name of the binding.
        name: String,
    },
    /// A name bound to a function was used as a value.
    #[error("'{name}' is a function and must be called with arguments.")]
    NotAValue {
        /// The name of the binding.
        name: String,
    },
    /// Division or remainder with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Integer arithmetic left the range of `i64`.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
    /// A function received the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human-readable description of the accepted arity, such as `2` or
        /// `at least 1`.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// A function received an argument outside of its domain.
    #[error("Invalid argument to '{name}': {details}.")]
    InvalidArgument {
        /// The name of the function.
        name:    String,
        /// Details about why the argument is invalid.
        details: String,
    },
}
