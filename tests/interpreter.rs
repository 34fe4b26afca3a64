use calcflow::{
    error::{CalcError, EvalError, InterpretError},
    interpreter::{
        core::Interpreter,
        evaluator::{core::Variables, function::core::Functions},
        translator::{Command, CommandKind},
    },
};

fn interpreter() -> Interpreter {
    Interpreter::new(&Variables::new(), Functions::builtin())
}

#[test]
fn assignments_build_on_each_other() {
    let variables = Variables::new();
    let mut interpreter = Interpreter::new(&variables, Functions::builtin());

    assert_eq!(interpreter.interpret("x = 5 + 12"), Ok(17.0));
    assert_eq!(interpreter.interpret("y = x + 23"), Ok(40.0));
    assert_eq!(interpreter.interpret("z = y + 42"), Ok(82.0));

    let expected = Variables::from([("x".to_string(), 17.0),
                                    ("y".to_string(), 40.0),
                                    ("z".to_string(), 82.0)]);
    assert_eq!(interpreter.variables(), &expected);
    assert!(variables.is_empty());
}

#[test]
fn expression_without_assignment_keeps_the_environment() {
    let mut interpreter = interpreter();
    assert_eq!(interpreter.interpret("2 + 3 * 4"), Ok(14.0));
    assert!(interpreter.variables().is_empty());
}

#[test]
fn reassignment_replaces_the_value() {
    let mut interpreter = interpreter();
    interpreter.interpret("x = 1").unwrap();
    assert_eq!(interpreter.interpret("x = x + 1"), Ok(2.0));
    assert_eq!(interpreter.variables()["x"], 2.0);
}

#[test]
fn comments_are_ignored() {
    let mut interpreter = interpreter();
    assert_eq!(interpreter.interpret("x = 5 + 12 // test"), Ok(17.0));
    assert_eq!(interpreter.interpret("x * 2// x = 100"), Ok(34.0));
    assert_eq!(interpreter.variables()["x"], 17.0);
}

#[test]
fn blank_lines_have_no_code() {
    let mut interpreter = interpreter();
    assert_eq!(interpreter.interpret(""), Err(InterpretError::NoCode));
    assert_eq!(interpreter.interpret("   "), Err(InterpretError::NoCode));
    assert_eq!(interpreter.interpret("// test"), Err(InterpretError::NoCode));
    assert_eq!(InterpretError::NoCode.to_string(), "no code");
}

#[test]
fn assignment_without_expression_fails_to_finalize() {
    let mut interpreter = interpreter();
    assert_eq!(interpreter.interpret("x ="),
               Err(InterpretError::Calculate(CalcError::FinalizeEvaluator(EvalError::EmptyStack))));
    assert!(interpreter.variables().is_empty());
}

#[test]
fn blank_target_is_a_plain_expression() {
    let mut interpreter = interpreter();
    assert_eq!(interpreter.interpret(" = 2 + 3"), Ok(5.0));
    assert!(interpreter.variables().is_empty());
}

#[test]
fn failed_line_leaves_the_environment_unchanged() {
    let mut interpreter = interpreter();
    interpreter.interpret("x = 1").unwrap();

    let error = interpreter.interpret("x = x + unknown").unwrap_err();
    assert_eq!(error,
               InterpretError::Calculate(CalcError::Evaluate(EvalError::UnknownVariable {
                   command: Command::new(CommandKind::PushVariable, "unknown"),
                   index:   0,
               })));
    assert!(error.to_string().starts_with("unable to calculate the input: unable to evaluate"));

    let unbalanced = interpreter.interpret("(1").unwrap_err();
    assert_eq!(interpreter.interpret("y = (1"), Err(unbalanced));
    assert_eq!(interpreter.variables(), &Variables::from([("x".to_string(), 1.0)]));
}

#[test]
fn builtins_provide_constants_and_functions() {
    let mut interpreter = Interpreter::with_builtins();
    let pi = interpreter.interpret("pi").unwrap();
    assert!((pi - std::f64::consts::PI).abs() < f64::EPSILON);

    assert_eq!(interpreter.interpret("r = floor(e * 10)"), Ok(27.0));
    assert_eq!(interpreter.variables()["r"], 27.0);
    assert!(interpreter.functions().get("atan2").is_some());
}

#[test]
fn cloned_interpreters_are_independent() {
    let mut first = interpreter();
    first.interpret("x = 1").unwrap();

    let mut second = first.clone();
    second.interpret("x = 2").unwrap();

    assert_eq!(first.variables()["x"], 1.0);
    assert_eq!(second.variables()["x"], 2.0);
}
