use super::*;
use crate::{EvalErrorKind, EvalResult, Executor, Value};
use crate::environment::Environment;
use mathlang_ir::Expr;
use pretty_assertions::assert_eq;

/// Executor that evaluates nothing; enough for bodies that never call back.
struct NoExecutor;

impl Executor for NoExecutor {
    fn eval_in(&mut self, _expr: &Expr, _env: &Environment) -> EvalResult {
        Ok(Value::int(0))
    }
}

fn count_args(args: &[Value], _env: &Environment, _exec: &mut dyn Executor) -> EvalResult {
    Ok(Value::int(args.len() as i64))
}

fn echo_args(args: &[Value], _env: &Environment, _exec: &mut dyn Executor) -> EvalResult {
    Ok(Value::list(args.to_vec()))
}

fn one(_args: &[Value], _env: &Environment, _exec: &mut dyn Executor) -> EvalResult {
    Ok(Value::int(1))
}

fn two(_args: &[Value], _env: &Environment, _exec: &mut dyn Executor) -> EvalResult {
    Ok(Value::int(2))
}

struct TestProvider;

impl Provider for TestProvider {
    fn name(&self) -> &'static str {
        "Test"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Count", "Count", "Test/Basic", count_args).variadic("xs", ""),
            Operation::new("Echo", "Echo", "Test/Basic", echo_args)
                .required("a", "")
                .optional("b", "", Value::int(5))
                .optional_absent("c", "")
                .optional("d", "", Value::int(9)),
            Operation::new("One", "One", "Test/Const", one),
        ]
    }
}

#[test]
fn test_register_provider() {
    let mut registry = OperationRegistry::new();
    assert!(registry.is_empty());
    registry.register_provider(&TestProvider);
    assert_eq!(registry.len(), 3);
    assert!(registry.contains("Echo"));
    assert!(registry.get("Missing").is_none());
    assert_eq!(registry.providers(), &["Test"]);
}

#[test]
fn test_last_registration_wins() {
    let mut registry = OperationRegistry::new();
    assert!(registry.register(Operation::new("X", "first", "T", one)).is_none());
    let replaced = registry.register(Operation::new("X", "second", "T", two));
    assert_eq!(replaced.map(|op| op.name), Some("first"));
    assert_eq!(registry.len(), 1);

    let env = Environment::new();
    let result = registry
        .get("X")
        .map(|op| op.invoke(vec![], &env, &mut NoExecutor));
    assert_eq!(result, Some(Ok(Value::int(2))));
}

#[test]
fn test_listing_is_sorted_and_grouped() {
    let mut registry = OperationRegistry::new();
    registry.register_provider(&TestProvider);

    let ids: Vec<_> = registry.list_all().iter().map(|op| op.identifier).collect();
    assert_eq!(ids, vec!["Count", "Echo", "One"]);

    let groups = registry.list_by_category();
    let summary: Vec<_> = groups
        .iter()
        .map(|(cat, ops)| (*cat, ops.iter().map(|op| op.identifier).collect::<Vec<_>>()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Test/Basic", vec!["Count", "Echo"]),
            ("Test/Const", vec!["One"]),
        ]
    );
}

#[test]
fn test_arity_bounds() {
    let op = Operation::new("Echo", "Echo", "T", echo_args)
        .required("a", "")
        .optional("b", "", Value::int(0));
    assert_eq!(op.min_args(), 1);
    assert_eq!(op.max_args(), Some(2));
    assert!(op.check_arity(1).is_ok());
    assert!(op.check_arity(2).is_ok());

    let err = op.check_arity(0).err();
    assert_eq!(
        err.as_ref().map(|e| e.message.as_str()),
        Some("Echo expects 1 to 2 arguments, got 0 arguments")
    );
    assert!(matches!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::ArgumentError { .. })
    ));
    assert!(op.check_arity(3).is_err());
}

#[test]
fn test_variadic_has_no_upper_bound() {
    let op = Operation::new("Count", "Count", "T", count_args)
        .required("first", "")
        .variadic("rest", "");
    assert_eq!(op.max_args(), None);
    assert!(op.check_arity(100).is_ok());
    assert_eq!(
        op.check_arity(0).err().map(|e| e.message),
        Some("Count expects at least 1 argument, got 0 arguments".to_string())
    );
}

#[test]
fn test_defaults_stop_at_first_absent_optional() {
    let mut registry = OperationRegistry::new();
    registry.register_provider(&TestProvider);
    let env = Environment::new();
    let echo = registry.get("Echo");

    // b defaults to 5; c has no default so d is not filled either
    let result = echo.map(|op| op.invoke(vec![Value::int(1)], &env, &mut NoExecutor));
    assert_eq!(
        result,
        Some(Ok(Value::list(vec![Value::int(1), Value::int(5)])))
    );

    // c supplied, so d picks up its default
    let result = echo.map(|op| {
        op.invoke(
            vec![Value::int(1), Value::int(2), Value::int(3)],
            &env,
            &mut NoExecutor,
        )
    });
    assert_eq!(
        result,
        Some(Ok(Value::list(vec![
            Value::int(1),
            Value::int(2),
            Value::int(3),
            Value::int(9),
        ])))
    );
}

#[test]
fn test_lazy_positions() {
    let op = Operation::new("If", "If", "T", one)
        .required("c", "")
        .required("t", "")
        .required("e", "")
        .lazy(&[2, 1, 2]);
    assert_eq!(op.lazy_positions(), &[1, 2]);
    assert!(!op.is_lazy(0));
    assert!(op.is_lazy(1));
    assert!(op.is_lazy(2));
}

#[test]
fn test_signature() {
    let mut registry = OperationRegistry::new();
    registry.register_provider(&TestProvider);
    let sigs: Vec<_> = registry.list_all().iter().map(|op| op.signature()).collect();
    assert_eq!(sigs, vec!["Count(xs...)", "Echo(a, [b], [c], [d])", "One()"]);
}

#[test]
fn test_apply_lambda_checks_arity_and_binds_params() {
    /// Evaluates identifiers by lookup and nothing else.
    struct Lookup;
    impl Executor for Lookup {
        fn eval_in(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
            match expr {
                Expr::Identifier(name) => env
                    .get(name)
                    .ok_or_else(|| crate::errors::undefined_variable(name)),
                _ => Ok(Value::int(0)),
            }
        }
    }

    let env = Environment::new();
    env.set("outer", Value::int(7));
    let Value::Lambda(ident) = Value::lambda(vec!["x".into()], Expr::ident("x")) else {
        panic!("expected lambda");
    };
    assert_eq!(
        Lookup.apply_lambda(&ident, vec![Value::int(3)], &env),
        Ok(Value::int(3))
    );
    assert!(Lookup
        .apply_lambda(&ident, vec![], &env)
        .is_err_and(|e| e.is_type_mismatch()));
    // the parameter binding does not leak into the caller
    assert_eq!(env.get("x"), None);

    let Value::Lambda(free) = Value::lambda(vec![], Expr::ident("outer")) else {
        panic!("expected lambda");
    };
    assert_eq!(Lookup.apply_lambda(&free, vec![], &env), Ok(Value::int(7)));

    let thunk = Value::thunk(Expr::ident("outer"), env.clone());
    assert_eq!(Lookup.force(&thunk), Ok(Value::int(7)));
    assert_eq!(Lookup.force(&Value::int(1)), Ok(Value::int(1)));
}
