use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_set_and_get() {
    let env = Environment::new();
    env.set("x", Value::int(10));
    assert_eq!(env.get("x"), Some(Value::int(10)));
    assert_eq!(env.get("y"), None);
    assert!(env.has("x"));
    assert!(!env.has("y"));
}

#[test]
fn test_child_sees_parent_bindings() {
    let parent = Environment::new();
    parent.set("x", Value::int(1));
    let child = parent.create_child();
    let grandchild = child.create_child();
    assert_eq!(grandchild.get("x"), Some(Value::int(1)));
    assert!(grandchild.has("x"));
}

#[test]
fn test_child_set_shadows_without_touching_parent() {
    let parent = Environment::new();
    parent.set("x", Value::int(1));
    let child = parent.create_child();
    child.set("x", Value::int(2));
    assert_eq!(child.get("x"), Some(Value::int(2)));
    assert_eq!(parent.get("x"), Some(Value::int(1)));
}

#[test]
fn test_parent_updates_are_visible_to_child() {
    let parent = Environment::new();
    let child = parent.create_child();
    parent.set("late", Value::int(7));
    assert_eq!(child.get("late"), Some(Value::int(7)));
}

#[test]
fn test_delete_is_local_only() {
    let parent = Environment::new();
    parent.set("x", Value::int(1));
    let child = parent.create_child();
    assert!(!child.delete("x"));
    assert_eq!(child.get("x"), Some(Value::int(1)));

    child.set("x", Value::int(2));
    assert!(child.delete("x"));
    assert_eq!(child.get("x"), Some(Value::int(1)));
}

#[test]
fn test_clear_is_local_only() {
    let parent = Environment::new();
    parent.set("a", Value::int(1));
    let child = parent.create_child();
    child.set("b", Value::int(2));
    child.clear();
    assert_eq!(child.get("b"), None);
    assert_eq!(child.get("a"), Some(Value::int(1)));
}

#[test]
fn test_list_visible_prefers_inner_bindings() {
    let parent = Environment::new();
    parent.set("a", Value::int(1));
    parent.set("b", Value::int(2));
    let child = parent.create_child();
    child.set("b", Value::int(20));
    child.set("c", Value::int(30));

    let visible = child.list_visible();
    let pairs: Vec<_> = visible.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
    assert_eq!(
        pairs,
        vec![
            ("a", Value::int(1)),
            ("b", Value::int(20)),
            ("c", Value::int(30)),
        ]
    );
    assert_eq!(parent.list_visible().len(), 2);
}

#[test]
fn test_snapshot_is_sorted_and_rendered() {
    let env = Environment::new();
    env.set("z", Value::real(1.5));
    env.set("a", Value::list(vec![Value::int(1), Value::int(2)]));

    assert_eq!(
        env.snapshot(),
        vec![
            VariableSnapshot {
                name: "a".into(),
                display: "[1, 2]".into(),
                type_name: "List (2 items)".into(),
            },
            VariableSnapshot {
                name: "z".into(),
                display: "1.5".into(),
                type_name: "Float".into(),
            },
        ]
    );
}

#[test]
fn test_clones_share_a_frame() {
    let env = Environment::new();
    let alias = env.clone();
    alias.set("x", Value::int(1));
    assert_eq!(env.get("x"), Some(Value::int(1)));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&env.create_child()));
    assert!(env.create_child().parent().is_some_and(|p| p.ptr_eq(&env)));
}

#[test]
fn test_deep_chain_lookup() {
    let root = Environment::new();
    root.set("x", Value::int(1));
    let mut env = root.clone();
    for _ in 0..1_000 {
        env = env.create_child();
    }
    assert_eq!(env.get("x"), Some(Value::int(1)));
}
