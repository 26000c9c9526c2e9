//! End-to-end tests through `evaluate`.

use mathlang_runtime::{
    undefined_variable, Environment, EvalResult, Executor, Operation, Provider, Value,
};
use pretty_assertions::assert_eq;

use super::{display, error_kind, eval, eval_err, run_in};
use crate::{builtin_registry, evaluate};

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(eval("1 + 2 * 3"), Value::int(7));
    assert_eq!(eval("(1 + 2) * 3"), Value::int(9));
    assert_eq!(eval("10 - 4 - 3"), Value::int(3));
    assert_eq!(eval("2 ^ 3 ^ 2"), Value::int(512));
    assert_eq!(eval("-2 ^ 2"), Value::int(-4));
    assert_eq!(eval("1 + 2 < 4"), Value::bool(true));
}

#[test]
fn test_assignment_binds_and_reports() {
    let env = Environment::new();
    let results = run_in("x = 42", &env);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_assignment);
    assert_eq!(results[0].variable_name.as_deref(), Some("x"));
    assert_eq!(results[0].value, Value::int(42));
    assert_eq!(env.get("x"), Some(Value::int(42)));

    let results = run_in("x * 2", &env);
    assert!(!results[0].is_assignment);
    assert_eq!(results[0].variable_name, None);
    assert_eq!(results[0].value, Value::int(84));
}

#[test]
fn test_one_result_per_statement() {
    let env = Environment::new();
    let results = run_in("a = 1\nb = a + 1; a + b", &env);
    let displays: Vec<String> = results.iter().map(|r| r.display()).collect();
    assert_eq!(displays, vec!["1", "2", "3"]);
    assert_eq!(results[2].type_name(), "Integer");
}

#[test]
fn test_failure_keeps_earlier_bindings() {
    let env = Environment::new();
    let registry = builtin_registry();
    let err = match evaluate("a = 1\nb = 1 / 0\nc = 3", &env, &registry) {
        Ok(results) => panic!("expected failure, got {results:?}"),
        Err(e) => e,
    };
    assert_eq!(err.kind_name(), "DivisionByZero");
    assert!(env.has("a"));
    assert!(!env.has("b"));
    assert!(!env.has("c"));
}

#[test]
fn test_recursive_function_with_lazy_branches() {
    assert_eq!(eval("f(n) = If(n <= 1, 1, n * f(n - 1))\nf(5)"), Value::int(120));
    // The untaken branch is never evaluated.
    assert_eq!(eval("If(1 > 0, 1, undefinedThing)"), Value::int(1));
    assert_eq!(eval("If(0, undefinedThing, 2)"), Value::int(2));
}

#[test]
fn test_deep_recursion() {
    assert_eq!(
        eval("down(n) = If(n <= 0, 0, 1 + down(n - 1))\ndown(2000)"),
        Value::int(2000)
    );
}

#[test]
fn test_lambdas_resolve_free_variables_at_call_site() {
    assert_eq!(eval("y = 10\nf(x) = x + y\nf(1)"), Value::int(11));
    assert_eq!(eval("g(x) = x + z\nz = 5\ng(1)"), Value::int(6));
    // Parameters shadow, and do not leak into the caller.
    let env = Environment::new();
    run_in("x = 100\nh(x) = x * 2\nh(3)", &env);
    assert_eq!(env.get("x"), Some(Value::int(100)));
}

#[test]
fn test_free_variables_bind_in_callers_frame() {
    // `y` comes from h's parameter frame, not from where f was defined.
    assert_eq!(eval("f(x) = x + y\nh(y) = f(1)\nh(5)"), Value::int(6));
}

#[test]
fn test_returned_lambda_does_not_capture() {
    let err = eval_err("make(n) = x -> x + n\nadd5 = make(5)\nadd5(1)");
    assert_eq!(err.kind_name(), "UndefinedVariable");
    assert_eq!(err.to_string(), "Undefined variable: 'n'");
}

#[test]
fn test_lambda_arity_mismatch() {
    assert_eq!(error_kind("f(x) = x\nf(1, 2)"), "TypeMismatch");
}

#[test]
fn test_large_range_is_not_materialized() {
    assert_eq!(eval("Length(Range(1, 1000000))"), Value::int(999_999));
    assert_eq!(eval("First(Range(1, 1000000))"), Value::int(1));
    assert_eq!(eval("Last(Range(1, 1000000))"), Value::int(999_999));
}

#[test]
fn test_higher_order_operations() {
    assert_eq!(display("Map(List(1, 2, 3), x -> x * 2)"), "[2, 4, 6]");
    assert_eq!(display("Filter(List(1, 2, 3, 4), x -> x > 2)"), "[3, 4]");
    assert_eq!(
        eval("Reduce(List(1, 2, 3, 4), (acc, x) -> acc + x, 0)"),
        Value::int(10)
    );
    // A lambda bound to a name can be passed along by name.
    assert_eq!(display("double(x) = x * 2\nMap(Range(0, 3), double)"), "[0, 2, 4]");
}

#[test]
fn test_error_kinds() {
    assert_eq!(error_kind("1 / 0"), "DivisionByZero");
    assert_eq!(error_kind("undefinedVar"), "UndefinedVariable");
    assert_eq!(error_kind("Sin(\"x\")"), "TypeMismatch");
    assert_eq!(error_kind("NoSuchOperation(1)"), "UndefinedOperation");
    assert_eq!(error_kind("Factorial(-1)"), "ArgumentError");
    assert_eq!(error_kind("Sqrt(1, 2)"), "ArgumentError");
    assert_eq!(error_kind("List(1) + 1"), "TypeMismatch");
    assert_eq!(error_kind("1 +"), "ParseError");
}

#[test]
fn test_error_messages() {
    assert_eq!(eval_err("1 / 0").to_string(), "Division by zero");
    assert_eq!(eval_err("nope").to_string(), "Undefined variable: 'nope'");
    assert_eq!(
        eval_err("Nope()").to_string(),
        "Undefined operation: 'Nope'"
    );
}

#[test]
fn test_parse_errors_carry_location() {
    let err = eval_err("x = 1\ny = )");
    assert_eq!(err.kind_name(), "ParseError");
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.column(), Some(5));

    let err = eval_err("1 / 0");
    assert_eq!(err.line(), None);
    assert_eq!(err.column(), None);
}

#[test]
fn test_evaluation_is_repeatable() {
    let source = "a = 3\nf(x) = x ^ 2 + a\nMap(List(1, 2, 3), f)";
    assert_eq!(display(source), display(source));

    let env = Environment::new();
    let first = run_in("r = Sum(Range(0, 10))", &env);
    let second = run_in("r = Sum(Range(0, 10))", &env);
    assert_eq!(first, second);
}

#[test]
fn test_named_constants() {
    assert_eq!(eval("[[PI]]"), Value::real(std::f64::consts::PI));
    assert_eq!(eval("2 * [[HoursInDay]]"), Value::int(48));
    let err = eval_err("[[NOPE]]");
    assert_eq!(err.kind_name(), "UndefinedVariable");
    assert!(err.to_string().contains("[[NOPE]]"), "{err}");
}

#[test]
fn test_indexing() {
    assert_eq!(eval("xs = List(10, 20, 30)\nxs[1]"), Value::int(20));
    assert_eq!(eval("v = Vec(1, 2, 3)\nv[2]"), Value::int(3));
    assert_eq!(eval("m = List(List(1, 2), List(3, 4))\nm[1][0]"), Value::int(3));
    assert_eq!(error_kind("xs = List(1)\nxs[5]"), "ArgumentError");
    assert_eq!(error_kind("xs = List(1)\nxs[-1]"), "ArgumentError");
    assert_eq!(error_kind("xs = List(1)\nxs[0.5]"), "TypeMismatch");
    assert_eq!(error_kind("n = 5\nn[0]"), "TypeMismatch");
}

#[test]
fn test_literals_and_display() {
    assert_eq!(display("3+2i"), "3.0 + 2.0i");
    assert_eq!(display("\"a\" + \"b\""), "ab");
    assert_eq!(display("7 / 2"), "3.5");
    assert_eq!(display("x -> x * 2"), "x -> x * 2");
    assert_eq!(eval("1 == 1"), Value::bool(true));
}

// Operators extended through the registry

fn concat_lists(args: &[Value], _env: &Environment, _exec: &mut dyn Executor) -> EvalResult {
    let mut items = Vec::new();
    for arg in args {
        match arg {
            Value::List(xs) => items.extend(xs.iter().cloned()),
            other => items.push(other.clone()),
        }
    }
    Ok(Value::list(items))
}

fn read_offset(_args: &[Value], env: &Environment, _exec: &mut dyn Executor) -> EvalResult {
    env.get("offset").ok_or_else(|| undefined_variable("offset"))
}

struct ListOperators;

impl Provider for ListOperators {
    fn name(&self) -> &'static str {
        "ListOperators"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("+", "List Concat", "Test/Operators", concat_lists)
                .required("left", "")
                .required("right", ""),
            Operation::new("-", "Scoped Minus", "Test/Operators", read_offset)
                .required("left", "")
                .required("right", ""),
        ]
    }
}

fn eval_with_list_operators(source: &str) -> Result<Vec<Value>, String> {
    let mut registry = builtin_registry();
    registry.register_provider(&ListOperators);
    evaluate(source, &Environment::new(), &registry)
        .map(|results| results.into_iter().map(|r| r.value).collect())
        .map_err(|e| e.kind_name().to_string())
}

#[test]
fn test_operator_falls_through_to_registry() {
    let values = match eval_with_list_operators("List(1, 2) + List(3)") {
        Ok(values) => values,
        Err(kind) => panic!("evaluation failed with {kind}"),
    };
    assert_eq!(values[0].display(), "[1, 2, 3]");

    // Builtin rules still win for scalars.
    match eval_with_list_operators("1 + 2") {
        Ok(values) => assert_eq!(values[0], Value::int(3)),
        Err(kind) => panic!("evaluation failed with {kind}"),
    }
}

#[test]
fn test_registry_operator_cannot_see_caller_scope() {
    assert_eq!(
        eval_with_list_operators("offset = 1\nList(1) - List(2)"),
        Err("UndefinedVariable".to_string())
    );
}
