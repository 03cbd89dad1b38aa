use std::f64::consts;

use crate::{
    error::EvalError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// Signature of a builtin: the function name (for error messages) and the
/// evaluated arguments.
type BuiltinFn = fn(&str, &[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a name, an arity specification, and a function
/// implementing the builtin. The macro produces `BUILTIN_TABLE` (used to
/// populate environments) and `BUILTIN_FUNCTIONS` (the public name list).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every function bound by [`environment`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().sin())) },
    "cos"   => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().cos())) },
    "tan"   => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().tan())) },
    "asin"  => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().asin())) },
    "acos"  => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().acos())) },
    "atan"  => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().atan())) },
    "sinh"  => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().sinh())) },
    "cosh"  => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().cosh())) },
    "tanh"  => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().tanh())) },
    "exp"   => { arity: Arity::Exact(1), func: |_, args| Ok(real(args[0].as_real().exp())) },
    "ln"    => { arity: Arity::Exact(1), func: ln },
    "sqrt"  => { arity: Arity::Exact(1), func: sqrt },
    "abs"   => { arity: Arity::Exact(1), func: abs },
    "sign"  => { arity: Arity::Exact(1), func: sign },
    "floor" => { arity: Arity::Exact(1), func: |_, args| Ok(rounded(args[0], f64::floor)) },
    "ceil"  => { arity: Arity::Exact(1), func: |_, args| Ok(rounded(args[0], f64::ceil)) },
    "round" => { arity: Arity::Exact(1), func: |_, args| Ok(rounded(args[0], f64::round)) },
    "trunc" => { arity: Arity::Exact(1), func: |_, args| Ok(rounded(args[0], f64::trunc)) },
    "log"   => { arity: Arity::Exact(2), func: log },
    "pow"   => { arity: Arity::Exact(2), func: |_, args| Ok(real(args[0].as_real().powf(args[1].as_real()))) },
    "atan2" => { arity: Arity::Exact(2), func: |_, args| Ok(real(args[0].as_real().atan2(args[1].as_real()))) },
    "min"   => { arity: Arity::AtLeast(1), func: |_, args| Ok(min_max(args, std::cmp::Ordering::Less)) },
    "max"   => { arity: Arity::AtLeast(1), func: |_, args| Ok(min_max(args, std::cmp::Ordering::Greater)) },
}

/// Names of every constant bound by [`environment`].
pub const BUILTIN_CONSTANTS: &[&str] = &["pi", "e", "tau"];

/// Builds a fresh environment holding the default constants and functions.
///
/// Constants: `pi`, `e`, `tau`. Functions: see [`BUILTIN_FUNCTIONS`]. Every
/// function checks its arity and fails with `ArgumentCountMismatch`.
///
/// # Example
/// ```
/// use tally::{Value, evaluate, prelude};
///
/// let env = prelude::environment().with_value("x", 3);
///
/// assert_eq!(evaluate("max(x, 10, 4)", &env), Ok(Value::Real(10.0)));
/// assert_eq!(evaluate("max(x, -1)", &env), Ok(Value::Integer(3)));
/// assert_eq!(evaluate("sqrt(16)", &env), Ok(Value::Real(4.0)));
/// assert!(evaluate("sqrt(1, 2)", &env).is_err());
/// ```
#[must_use]
pub fn environment() -> Environment {
    let mut env = Environment::new().with_value("pi", consts::PI)
                                    .with_value("e", consts::E)
                                    .with_value("tau", consts::TAU);

    for builtin in BUILTIN_TABLE {
        let BuiltinDef { name, arity, func } = *builtin;
        env.set_function(name, move |args| {
               if !arity.check(args.len()) {
                   return Err(EvalError::ArgumentCountMismatch { name:     name.to_owned(),
                                                                 expected: arity.describe(),
                                                                 found:    args.len(), });
               }
               func(name, args)
           });
    }

    env
}

const fn real(r: f64) -> Value {
    Value::Real(r)
}

/// Applies a rounding function, keeping integers unchanged.
fn rounded(value: Value, f: fn(f64) -> f64) -> Value {
    match value {
        Value::Integer(n) => Value::Integer(n),
        Value::Real(r) => Value::Real(f(r)),
    }
}

fn invalid(name: &str, details: impl Into<String>) -> EvalError {
    EvalError::InvalidArgument { name:    name.to_owned(),
                                 details: details.into(), }
}

fn ln(name: &str, args: &[Value]) -> EvalResult<Value> {
    let x = args[0].as_real();
    if x <= 0.0 {
        return Err(invalid(name, format!("logarithm is only defined for positive numbers, but found {x}")));
    }
    Ok(real(x.ln()))
}

/// `log(x, base)`: logarithm of `x` in an arbitrary positive base.
fn log(name: &str, args: &[Value]) -> EvalResult<Value> {
    let (x, base) = (args[0].as_real(), args[1].as_real());
    if x <= 0.0 {
        return Err(invalid(name, format!("logarithm is only defined for positive numbers, but found {x}")));
    }
    if base <= 0.0 || (base - 1.0).abs() < f64::EPSILON {
        return Err(invalid(name, format!("base must be positive and not 1, but found {base}")));
    }
    Ok(real(x.log(base)))
}

fn sqrt(name: &str, args: &[Value]) -> EvalResult<Value> {
    let x = args[0].as_real();
    if x < 0.0 {
        return Err(invalid(name, format!("square root of negative number {x}")));
    }
    Ok(real(x.sqrt()))
}

fn abs(_: &str, args: &[Value]) -> EvalResult<Value> {
    match args[0] {
        Value::Integer(n) => n.checked_abs().map(Value::Integer).ok_or(EvalError::Overflow),
        Value::Real(r) => Ok(real(r.abs())),
    }
}

/// `-1`, `0` or `1`; zero stays zero for both kinds.
fn sign(_: &str, args: &[Value]) -> EvalResult<Value> {
    Ok(match args[0] {
        Value::Integer(n) => Value::Integer(n.signum()),
        Value::Real(r) if r == 0.0 || r.is_nan() => Value::Real(r),
        Value::Real(r) => real(r.signum()),
    })
}

/// Picks the smallest (`Less`) or largest (`Greater`) argument.
///
/// The winning argument is returned as-is, so integers stay integers. Ties
/// keep the first candidate. Comparisons with NaN are false, so the result
/// depends on order: a NaN first argument is never replaced, while a later
/// NaN never wins (`max(nan, 1)` is NaN, `max(1, nan)` is `1`).
fn min_max(args: &[Value], wanted: std::cmp::Ordering) -> Value {
    args.iter().copied().fold(args[0], |best, candidate| {
                            let (b, c) = best.promote(candidate);
                            match c.as_real().partial_cmp(&b.as_real()) {
                                Some(ordering) if ordering == wanted => candidate,
                                _ => best,
                            }
                        })
}
