use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    error::EvalError,
    interpreter::value::core::{ParseValueError, Value},
};

/// Signature shared by every callable binding.
///
/// A callable receives the evaluated arguments in source order and may fail
/// with any [`EvalError`], which the evaluator propagates unchanged.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, EvalError>;

/// A variadic function bound in an [`Environment`].
#[derive(Clone)]
pub struct Callable(Rc<NativeFn>);

impl Callable {
    /// Wraps a closure or function pointer.
    pub fn new(f: impl Fn(&[Value]) -> Result<Value, EvalError> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the function with already evaluated arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.0)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// What a name is bound to.
///
/// Keeping the two kinds tagged lets the evaluator report a clean error when a
/// value is called or a function is read as a value.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A plain numeric value, usable as a variable.
    Value(Value),
    /// A function, usable only in call position.
    Callable(Callable),
}

/// The identifier bindings an expression is evaluated against.
///
/// The environment is supplied by the caller and only read during evaluation.
/// It can be built with the `with_*` builder methods or filled in place with
/// the `set_*` methods.
///
/// # Example
/// ```
/// use tally::{Environment, Value};
///
/// let env = Environment::new().with_value("x", 3)
///                             .with_function("double", |args| {
///                                 Ok(Value::Real(args[0].as_real() * 2.0))
///                             });
///
/// assert_eq!(tally::evaluate("double(x)", &env), Ok(Value::Real(6.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the environment with `name` bound to a value.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_value(name, value);
        self
    }

    /// Returns the environment with `name` bound to a function.
    #[must_use]
    pub fn with_function(mut self,
                         name: impl Into<String>,
                         f: impl Fn(&[Value]) -> Result<Value, EvalError> + 'static)
                         -> Self {
        self.set_function(name, f);
        self
    }

    /// Binds `name` to a value, replacing any previous binding.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings
            .insert(name.into(), Binding::Value(value.into()));
    }

    /// Binds `name` to a function, replacing any previous binding.
    pub fn set_function(&mut self,
                        name: impl Into<String>,
                        f: impl Fn(&[Value]) -> Result<Value, EvalError> + 'static) {
        self.bindings
            .insert(name.into(), Binding::Callable(Callable::new(f)));
    }

    /// Looks up the binding for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Returns `true` if `name` is bound to anything.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// The number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Copies every binding of `other` into this environment, overriding
    /// names that are already bound.
    pub fn extend(&mut self, other: &Self) {
        self.bindings
            .extend(other.bindings.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Iterates over all bound names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

/// The error returned when a `NAME=VALUE` definition cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// The text has no `=` separating name and value.
    #[error("expected NAME=VALUE, found '{0}'")]
    MissingSeparator(String),
    /// Nothing precedes the `=`.
    #[error("definition '{0}' has an empty name")]
    EmptyName(String),
    /// The value part is not a number.
    #[error(transparent)]
    InvalidValue(#[from] ParseValueError),
}

/// Reads a `NAME=VALUE` definition as a host would pass it on a command line.
///
/// Whitespace around the name and the value is ignored. The value is read
/// with [`Value`]'s `FromStr`, so `3` binds an integer and `3.0` a real.
///
/// # Errors
/// [`DefinitionError`] if there is no `=`, the name is empty, or the value is
/// not a number.
///
/// # Example
/// ```
/// use tally::{Value, interpreter::environment::parse_definition};
///
/// assert_eq!(parse_definition("x=3"), Ok(("x".to_string(), Value::Integer(3))));
/// assert_eq!(parse_definition(" r = 0.5 "), Ok(("r".to_string(), Value::Real(0.5))));
/// assert!(parse_definition("x").is_err());
/// ```
pub fn parse_definition(text: &str) -> Result<(String, Value), DefinitionError> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| DefinitionError::MissingSeparator(text.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(DefinitionError::EmptyName(text.to_string()));
    }

    Ok((name.to_string(), value.parse()?))
}
