use std::fs;

use calcflow::{
    calculate,
    error::InterpretError,
    interpreter::{
        core::Interpreter,
        evaluator::{core::Variables, function::core::Functions},
    },
};
use walkdir::WalkDir;

const EXPECT_VALUE: &str = "// expect:";
const EXPECT_ERROR: &str = "// expect-error";

/// What a script line declares about its own outcome.
enum Expectation {
    Value(f64),
    Error,
    Anything,
}

fn expectation(line: &str) -> Expectation {
    if line.contains(EXPECT_ERROR) {
        return Expectation::Error;
    }
    line.split_once(EXPECT_VALUE)
        .map_or(Expectation::Anything, |(_, value)| {
            Expectation::Value(value.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("bad expectation in {line:?}: {e}")))
        })
}

fn close_enough(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

/// Runs a script line by line through one interpreter, checking every
/// annotated line. Returns the number of annotations checked.
fn run_script(name: &str, script: &str) -> usize {
    let mut interpreter = Interpreter::with_builtins();
    let mut checked = 0;

    for (number, line) in script.lines().enumerate() {
        let location = format!("{name}:{}", number + 1);
        let result = interpreter.interpret(line);
        match (expectation(line), result) {
            (Expectation::Value(expected), Ok(actual)) => {
                assert!(close_enough(actual, expected),
                        "{location}: expected {expected}, got {actual}");
                checked += 1;
            },
            (Expectation::Value(expected), Err(e)) => {
                panic!("{location}: expected {expected}, got error: {e}")
            },
            (Expectation::Error, Ok(actual)) => {
                panic!("{location}: expected an error, got {actual}")
            },
            (Expectation::Error, Err(_)) => checked += 1,
            (Expectation::Anything, Ok(_) | Err(InterpretError::NoCode)) => {},
            (Expectation::Anything, Err(e)) => panic!("{location}: {e}"),
        }
    }

    checked
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += run_script(&path.display().to_string(), &script);
    }

    assert!(count > 0, "No annotated lines found in tests/scripts");
}

fn assert_value(src: &str, expected: f64) {
    match Interpreter::with_builtins().interpret(src) {
        Ok(actual) => assert!(close_enough(actual, expected), "{src}: got {actual}"),
        Err(e) => panic!("Line failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if Interpreter::with_builtins().interpret(src).is_ok() {
        panic!("Line succeeded but was expected to fail")
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 ^ 3 ^ 2", 64.0);
    assert_value("0 - 2 ^ 2", -4.0);
}

#[test]
fn unary_minus_is_a_binary_minus_with_a_missing_operand() {
    // A leading minus only has the value below it on the stack.
    assert_failure("-2");
    assert_failure("3 * -2");
    assert_failure("-2 ^ 2");
}

#[test]
fn function_calls() {
    assert_value("sqrt(9) + 1", 4.0);
    assert_value("atan2(1, 1) * 4", std::f64::consts::PI);
    assert_value("abs(floor(0 - 2.5))", 3.0);
    assert_value("log10(1e3)", 3.0);
}

#[test]
fn malformed_lines_fail() {
    assert_failure("2 + + 3");
    assert_failure("sqrt(1, 2");
    assert_failure("1.2.3");
    assert_failure("x = 2 ! 3");
    assert_failure("y = unknown");
}

// =============================================================================
// Oracle
// =============================================================================

/// A small expression tree evaluated by structural recursion.
#[derive(Debug, Clone)]
enum Expr {
    Number(&'static str),
    Variable(&'static str),
    Binary(char, Box<Expr>, Box<Expr>),
    Call(&'static str, Vec<Expr>),
}

impl Expr {
    /// Renders the tree with every compound subexpression parenthesized.
    fn render(&self) -> String {
        match self {
            Self::Number(literal) | Self::Variable(literal) => (*literal).to_string(),
            Self::Binary(op, lhs, rhs) => format!("({} {op} {})", lhs.render(), rhs.render()),
            Self::Call(name, args) => {
                let args = args.iter().map(Self::render).collect::<Vec<_>>();
                format!("{name}({})", args.join(", "))
            },
        }
    }

    fn eval(&self, variables: &Variables) -> f64 {
        match self {
            Self::Number(literal) => literal.parse().unwrap(),
            Self::Variable(name) => variables[*name],
            Self::Binary(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(variables), rhs.eval(variables));
                match *op {
                    '+' => a + b,
                    '-' => a - b,
                    '*' => a * b,
                    '/' => a / b,
                    '%' => a % b,
                    '^' => a.powf(b),
                    _ => unreachable!("operator {op}"),
                }
            },
            Self::Call(name, args) => {
                let args = args.iter().map(|arg| arg.eval(variables)).collect::<Vec<_>>();
                match *name {
                    "sqrt" => args[0].sqrt(),
                    "atan2" => args[0].atan2(args[1]),
                    _ => unreachable!("function {name}"),
                }
            },
        }
    }
}

fn leaves() -> Vec<Expr> {
    vec![Expr::Number("2"), Expr::Number("0.5"), Expr::Variable("x")]
}

/// Every tree one level deeper than the given ones.
fn grow(parts: &[Expr]) -> Vec<Expr> {
    let mut trees = parts.to_vec();
    for lhs in parts {
        trees.push(Expr::Call("sqrt", vec![lhs.clone()]));
        for rhs in parts {
            for op in ['+', '-', '*', '/', '%', '^'] {
                trees.push(Expr::Binary(op, Box::new(lhs.clone()), Box::new(rhs.clone())));
            }
            trees.push(Expr::Call("atan2", vec![lhs.clone(), rhs.clone()]));
        }
    }
    trees
}

fn same(actual: f64, expected: f64) -> bool {
    actual.to_bits() == expected.to_bits() || (actual.is_nan() && expected.is_nan())
}

#[test]
fn pipeline_matches_recursive_evaluation() {
    let variables = Variables::from([("x".to_string(), 3.0)]);
    let functions = Functions::builtin();

    let level_one = grow(&leaves());
    let level_two = grow(&level_one[..12]);
    let mut checked = 0;

    for tree in level_one.iter().chain(&level_two) {
        let code = tree.render();
        let actual = calculate(&code, &variables, &functions)
            .unwrap_or_else(|e| panic!("{code}: {e}"));
        let expected = tree.eval(&variables);
        assert!(same(actual, expected), "{code}: pipeline {actual}, recursion {expected}");
        checked += 1;
    }

    assert!(checked > 1000);
}
