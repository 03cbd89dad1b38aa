use std::fs;

use pretty_assertions::assert_eq;
use tally::{Environment, Error, Value, evaluate, prelude};
use walkdir::WalkDir;

/// The environment every case file is evaluated against.
fn case_environment() -> Environment {
    prelude::environment().with_value("x", 3)
                          .with_value("n", -7)
                          .with_value("half", 0.5)
                          .with_value("big", i64::MAX)
}

#[derive(Debug)]
enum Expected {
    Number(f64),
    Error(String),
}

/// Reads `<expression> => <number>` and `<expression> => error: <Kind>`
/// lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, Expected)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|line| {
               let (expr, expected) = line.rsplit_once("=>")
                                          .unwrap_or_else(|| panic!("Malformed case line: {line}"));
               let expected = expected.trim();
               let expected = match expected.strip_prefix("error:") {
                   Some(kind) => Expected::Error(kind.trim().to_string()),
                   None => Expected::Number(expected.parse()
                                                    .unwrap_or_else(|e| {
                                                        panic!("Bad expected value in {line}: {e}")
                                                    })),
               };
               (expr.trim().to_string(), expected)
           })
           .collect()
}

/// The variant name of an error, e.g. `UnboundVariable`.
fn kind_name(error: &Error) -> String {
    let debug = match error {
        Error::Parse(e) => format!("{:?}", e.kind),
        Error::Eval(e) => format!("{e:?}"),
    };
    debug.chars().take_while(char::is_ascii_alphanumeric).collect()
}

fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn check_case(expr: &str, expected: &Expected, env: &Environment) -> Result<(), String> {
    match (evaluate(expr, env), expected) {
        (Ok(value), Expected::Number(n)) if approx_eq(value.as_real(), *n) => Ok(()),
        (Err(e), Expected::Error(kind)) if kind_name(&e) == *kind => Ok(()),
        (actual, expected) => Err(format!("`{expr}`: expected {expected:?}, got {actual:?}")),
    }
}

#[test]
fn case_files_evaluate_as_expected() {
    let env = case_environment();
    let mut count = 0;
    let mut failures = Vec::new();

    for entry in
        WalkDir::new("tests/cases").sort_by_file_name()
                                   .into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expr, expected) in extract_cases(&content) {
            count += 1;
            if let Err(message) = check_case(&expr, &expected, &env) {
                failures.push(format!("{}: {message}", path.display()));
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
    assert_eq!(failures, Vec::<String>::new());
}

#[test]
fn literal_evaluates_to_itself_in_any_environment() {
    assert_eq!(evaluate("3.5", &Environment::new()), Ok(Value::Real(3.5)));
    assert_eq!(evaluate("3.5", &case_environment()), Ok(Value::Real(3.5)));
}

#[test]
fn subtraction_groups_to_the_right() {
    assert_eq!(evaluate("10 - 3 - 2", &Environment::new()), Ok(Value::Real(9.0)));
}

#[test]
fn integer_bindings_stay_integers_except_under_division() {
    let env = case_environment();

    assert_eq!(evaluate("x * x", &env), Ok(Value::Integer(9)));
    assert_eq!(evaluate("n % x", &env), Ok(Value::Integer(-1)));
    assert_eq!(evaluate("n / x", &env), Ok(Value::Real(-7.0 / 3.0)));
    assert_eq!(evaluate("-x", &env), Ok(Value::Integer(-3)));
    assert_eq!(evaluate("x * 1", &env), Ok(Value::Real(3.0)));
}

#[test]
fn nan_and_infinity_propagate_from_the_environment() {
    let env = Environment::new().with_value("inf", f64::INFINITY)
                                .with_value("nan", f64::NAN);

    assert_eq!(evaluate("inf - 1", &env), Ok(Value::Real(f64::INFINITY)));
    assert_eq!(evaluate("1 / inf", &env), Ok(Value::Real(0.0)));
    let Ok(Value::Real(r)) = evaluate("nan * 2", &env) else {
        panic!("expected a real result");
    };
    assert!(r.is_nan());
}

#[test]
fn literal_only_expressions_never_fail_except_on_zero_divisors() {
    let env = Environment::new();
    let operators = ['+', '-', '*', '/', '%'];
    let operands = ["0", "1", "2.5", "7", "(0 - 3)", "-0.5"];

    for a in operands {
        for op in operators {
            for b in operands {
                let source = format!("{a} {op} {b}");
                match evaluate(&source, &env) {
                    Ok(Value::Real(_)) => {},
                    Err(Error::Eval(tally::EvalError::DivisionByZero)) if matches!(op, '/' | '%') => {},
                    other => panic!("`{source}` produced {other:?}"),
                }
            }
        }
    }
}
