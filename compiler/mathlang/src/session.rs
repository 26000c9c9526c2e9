//! One evaluation session: a registry plus a persistent environment.

use mathlang_eval::{builtin_registry, evaluate, EngineError, EvaluationResult};
use mathlang_runtime::{Environment, OperationRegistry, Value, VariableSnapshot};

/// Registry and environment shared by every evaluation of a host session.
pub struct Session {
    registry: OperationRegistry,
    env: Environment,
}

impl Session {
    /// Session over the builtin registry with no bindings.
    pub fn new() -> Self {
        Session::with_registry(builtin_registry())
    }

    pub fn with_registry(registry: OperationRegistry) -> Self {
        Session {
            registry,
            env: Environment::new(),
        }
    }

    /// Evaluate `source`; bindings persist into later calls.
    pub fn eval(&self, source: &str) -> Result<Vec<EvaluationResult>, EngineError> {
        evaluate(source, &self.env, &self.registry)
    }

    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.env.set(name, value);
    }

    /// Drop every binding of the session frame.
    pub fn clear(&self) {
        self.env.clear();
    }

    pub fn variables(&self) -> Vec<VariableSnapshot> {
        self.env.snapshot()
    }

    #[inline]
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// `name = display` for assignments, `display (type)` otherwise.
pub fn format_result(result: &EvaluationResult) -> String {
    match &result.variable_name {
        Some(name) if result.is_assignment => format!("{name} = {}", result.display()),
        _ => format!("{} ({})", result.display(), result.type_name()),
    }
}

/// Host-supplied value text: integer, then real, then string.
pub fn parse_seed_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::int(n);
    }
    if let Ok(r) = raw.parse::<f64>() {
        return Value::real(r);
    }
    Value::string(raw)
}

/// Parse a `name=value` binding.
pub fn parse_var_arg(arg: &str) -> Result<(String, Value), String> {
    let Some((name, raw)) = arg.split_once('=') else {
        return Err(format!("invalid --var '{arg}': expected name=value"));
    };
    let name = name.trim();
    let valid = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(format!("invalid --var '{arg}': '{name}' is not an identifier"));
    }
    Ok((name.to_string(), parse_seed_value(raw)))
}

#[cfg(test)]
mod tests;
