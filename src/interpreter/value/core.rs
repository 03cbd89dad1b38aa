use std::{fmt, str::FromStr};

/// Represents a runtime value in the interpreter.
///
/// Literals in source text always evaluate to [`Value::Real`]; integers only
/// enter through the environment (bindings or function results). Mixed
/// operations promote the integer operand to a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision in the conversion.
    ///
    /// # Example
    /// ```
    /// use tally::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Returns `true` if the value is numerically zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Real(r) => r == 0.0,
            Self::Integer(n) => n == 0,
        }
    }

    /// Promotes a pair of operands to a common kind.
    ///
    /// If either side is real, both are returned as reals; two integers are
    /// returned unchanged.
    ///
    /// # Example
    /// ```
    /// use tally::Value;
    ///
    /// let (l, r) = Value::Integer(1).promote(Value::Real(0.5));
    /// assert_eq!((l, r), (Value::Real(1.0), Value::Real(0.5)));
    ///
    /// let (l, r) = Value::Integer(1).promote(Value::Integer(2));
    /// assert_eq!((l, r), (Value::Integer(1), Value::Integer(2)));
    /// ```
    #[must_use]
    pub fn promote(self, other: Self) -> (Self, Self) {
        match (self, other) {
            (Self::Integer(_), Self::Integer(_)) | (Self::Real(_), Self::Real(_)) => (self, other),
            _ => (Self::Real(self.as_real()), Self::Real(other.as_real())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// The error returned when text is neither an integer nor a real number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a number")]
pub struct ParseValueError(pub String);

/// Reads a value the way a host would supply it: text that parses as `i64`
/// becomes an integer, otherwise it must parse as `f64`.
///
/// # Example
/// ```
/// use tally::Value;
///
/// assert_eq!("3".parse::<Value>(), Ok(Value::Integer(3)));
/// assert_eq!("3.0".parse::<Value>(), Ok(Value::Real(3.0)));
/// assert!("three".parse::<Value>().is_err());
/// ```
impl FromStr for Value {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self::Integer(n));
        }
        s.parse::<f64>()
         .map(Self::Real)
         .map_err(|_| ParseValueError(s.to_string()))
    }
}
