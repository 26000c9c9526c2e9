use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_format_result() {
    assert_eq!(
        format_result(&EvaluationResult::expression(Value::int(7))),
        "7 (Integer)"
    );
    assert_eq!(
        format_result(&EvaluationResult::assignment("x", Value::real(0.5))),
        "x = 0.5"
    );
}

#[test]
fn test_seed_values_prefer_integer_then_real() {
    assert_eq!(parse_seed_value("42"), Value::int(42));
    assert_eq!(parse_seed_value("-3"), Value::int(-3));
    assert_eq!(parse_seed_value("2.5"), Value::real(2.5));
    assert_eq!(parse_seed_value("hello"), Value::string("hello"));
    assert_eq!(parse_seed_value(""), Value::string(""));
}

#[test]
fn test_parse_var_arg() {
    assert_eq!(
        parse_var_arg("rate=0.25"),
        Ok(("rate".to_string(), Value::real(0.25)))
    );
    assert_eq!(
        parse_var_arg("label=a=b"),
        Ok(("label".to_string(), Value::string("a=b")))
    );
    assert!(parse_var_arg("novalue").is_err());
    assert!(parse_var_arg("1x=2").is_err());
    assert!(parse_var_arg("=2").is_err());
}

#[test]
fn test_session_keeps_bindings_between_calls() {
    let session = Session::new();
    if let Err(e) = session.eval("x = 20") {
        panic!("assignment failed: {e}");
    }
    let results = match session.eval("x + 1") {
        Ok(results) => results,
        Err(e) => panic!("evaluation failed: {e}"),
    };
    assert_eq!(results[0].value, Value::int(21));

    session.clear();
    assert!(session.variables().is_empty());
    assert!(!session.env().has("x"));
    assert!(session.eval("x").is_err());
}

#[test]
fn test_seeded_binding_is_visible() {
    let session = Session::default();
    session.set("n", parse_seed_value("4"));
    let vars = session.variables();
    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].name, "n");
    assert_eq!(vars[0].display, "4");
    assert_eq!(vars[0].type_name, "Integer");
}
