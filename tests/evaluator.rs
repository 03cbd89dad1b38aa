use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use tally::{
    Binding, Environment, EvalError, Value,
    interpreter::{
        environment::{DefinitionError, parse_definition},
        value::core::ParseValueError,
    },
    parse, prelude,
};

fn eval(source: &str, env: &Environment) -> Result<Value, EvalError> {
    parse(source).unwrap_or_else(|e| panic!("failed to parse `{source}`:\n{e}"))
                 .evaluate(env)
}

#[test]
fn unbound_identifiers_are_reported_by_name() {
    let env = Environment::new();

    assert_eq!(eval("y", &env), Err(EvalError::UnboundVariable { name: "y".into() }));
    assert_eq!(eval("f(1)", &env), Err(EvalError::UnboundFunction { name: "f".into() }));
}

#[test]
fn binding_kinds_are_not_interchangeable() {
    let env = Environment::new().with_value("x", 2)
                                .with_function("f", |_| Ok(Value::Integer(0)));

    assert_eq!(eval("x(1)", &env), Err(EvalError::NotCallable { name: "x".into() }));
    assert_eq!(eval("f + 1", &env), Err(EvalError::NotAValue { name: "f".into() }));
}

#[test]
fn arguments_are_evaluated_left_to_right_before_the_call() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&log);
    let env = Environment::new().with_function("tap", move |args| {
                                    seen.borrow_mut().push(args[0]);
                                    Ok(args[0])
                                });

    let result = eval("tap(1) + tap(2) * tap(tap(3))", &env);

    assert_eq!(result, Ok(Value::Real(7.0)));
    assert_eq!(*log.borrow(),
               vec![Value::Real(1.0), Value::Real(2.0), Value::Real(3.0), Value::Real(3.0)]);
}

#[test]
fn argument_errors_win_over_lookup_errors() {
    let env = Environment::new();

    assert_eq!(eval("missing(y)", &env), Err(EvalError::UnboundVariable { name: "y".into() }));
}

#[test]
fn callable_errors_propagate_unchanged() {
    let env = Environment::new().with_function("fail", |_| {
                                    Err(EvalError::InvalidArgument { name:    "fail".into(),
                                                                     details: "always".into(), })
                                });

    assert_eq!(eval("1 + fail()", &env),
               Err(EvalError::InvalidArgument { name:    "fail".into(),
                                                details: "always".into(), }));
}

#[test]
fn mixed_operands_promote_to_real() {
    let env = Environment::new().with_value("i", 7)
                                .with_value("j", 2)
                                .with_value("r", 2.0);

    assert_eq!(eval("i / j", &env), Ok(Value::Real(3.5)));
    assert_eq!(eval("i / r", &env), Ok(Value::Real(3.5)));
    assert_eq!(eval("i % j", &env), Ok(Value::Integer(1)));
    assert_eq!(eval("i - j", &env), Ok(Value::Integer(5)));
    assert_eq!(eval("i + 0", &env), Ok(Value::Real(7.0)));
}

#[test]
fn division_of_integers_is_true_division() {
    let env = Environment::new().with_value("x", 7)
                                .with_value("y", 2)
                                .with_value("min", i64::MIN)
                                .with_value("neg_one", -1);

    assert_eq!(eval("x / y", &env), Ok(Value::Real(3.5)));
    assert_eq!(eval("x / x", &env), Ok(Value::Real(1.0)));
    assert_eq!(eval("min / neg_one", &env), Ok(Value::Real(9_223_372_036_854_775_808.0)));
    assert_eq!(eval("x % y", &env), Ok(Value::Integer(1)));
}

#[test]
fn arithmetic_faults() {
    let env = Environment::new().with_value("zero", 0)
                                .with_value("min", i64::MIN)
                                .with_value("neg_one", -1);

    assert_eq!(eval("1 / zero", &env), Err(EvalError::DivisionByZero));
    assert_eq!(eval("1 % 0", &env), Err(EvalError::DivisionByZero));
    assert_eq!(eval("1 / -0", &env), Err(EvalError::DivisionByZero));
    assert_eq!(eval("-min", &env), Err(EvalError::Overflow));
    assert_eq!(eval("min % neg_one", &env), Err(EvalError::Overflow));
    assert_eq!(eval("min * min", &env), Err(EvalError::Overflow));
}

#[test]
fn environment_bindings_can_be_replaced_and_merged() {
    let mut env = Environment::new().with_value("x", 1);
    env.set_value("x", 2.5);
    assert_eq!(eval("x", &env), Ok(Value::Real(2.5)));

    env.set_function("x", |_| Ok(Value::Integer(9)));
    assert_eq!(eval("x()", &env), Ok(Value::Integer(9)));
    assert!(matches!(env.get("x"), Some(Binding::Callable(_))));

    let empty = Environment::new();
    assert!(empty.is_empty());
    assert!(env.contains("x") && !env.contains("y"));
    assert_eq!(env.names().collect::<Vec<_>>(), vec!["x"]);

    let mut merged = prelude::environment();
    let before = merged.len();
    merged.extend(&Environment::new().with_value("pi", 3));
    assert_eq!(merged.len(), before);
    assert_eq!(eval("pi", &merged), Ok(Value::Integer(3)));
}

#[test]
fn prelude_binds_every_advertised_name() {
    let env = prelude::environment();

    for name in prelude::BUILTIN_FUNCTIONS {
        assert!(matches!(env.get(name), Some(Binding::Callable(_))), "{name} is not callable");
    }
    for name in prelude::BUILTIN_CONSTANTS {
        assert!(matches!(env.get(name), Some(Binding::Value(_))), "{name} is not a value");
    }
    assert_eq!(env.len(), prelude::BUILTIN_FUNCTIONS.len() + prelude::BUILTIN_CONSTANTS.len());
}

#[test]
fn prelude_checks_arity_and_domain() {
    let env = prelude::environment();

    assert_eq!(eval("sin(1, 2)", &env),
               Err(EvalError::ArgumentCountMismatch { name:     "sin".into(),
                                                      expected: "1".into(),
                                                      found:    2, }));
    assert_eq!(eval("min()", &env),
               Err(EvalError::ArgumentCountMismatch { name:     "min".into(),
                                                      expected: "at least 1".into(),
                                                      found:    0, }));
    assert!(matches!(eval("ln(0)", &env), Err(EvalError::InvalidArgument { .. })));
    assert!(matches!(eval("sqrt(-4)", &env), Err(EvalError::InvalidArgument { .. })));
}

#[test]
fn min_and_max_depend_on_nan_position() {
    let env = prelude::environment().with_value("nan", f64::NAN);

    assert_eq!(eval("max(1, nan)", &env), Ok(Value::Real(1.0)));
    assert_eq!(eval("min(1, nan, 0)", &env), Ok(Value::Real(0.0)));
    let Ok(Value::Real(r)) = eval("max(nan, 1)", &env) else {
        panic!("expected a real result");
    };
    assert!(r.is_nan());
}

#[test]
fn definitions_are_read_as_name_and_value() {
    assert_eq!(parse_definition("x=3"), Ok(("x".to_string(), Value::Integer(3))));
    assert_eq!(parse_definition(" rate = -0.25"), Ok(("rate".to_string(), Value::Real(-0.25))));
    assert_eq!(parse_definition("x"), Err(DefinitionError::MissingSeparator("x".into())));
    assert_eq!(parse_definition("=3"), Err(DefinitionError::EmptyName("=3".into())));
    assert_eq!(parse_definition("x=three"),
               Err(DefinitionError::InvalidValue(ParseValueError("three".into()))));
    assert_eq!(parse_definition("x").unwrap_err().to_string(),
               "expected NAME=VALUE, found 'x'");

    let (name, value) = parse_definition("pi=3").unwrap();
    let env = prelude::environment().with_value(name, value);
    assert_eq!(eval("pi", &env), Ok(Value::Integer(3)));
}

#[test]
fn eval_errors_have_readable_messages() {
    assert_eq!(EvalError::UnboundVariable { name: "y".into() }.to_string(),
               "Unknown variable 'y'.");
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero.");
}
