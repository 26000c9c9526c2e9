//! Builtin operation descriptors.
//!
//! An [`Operation`] is immutable once registered. Its metadata drives the
//! call-site protocol: the arity check, default filling, and which argument
//! positions arrive as thunks instead of values. Bodies only do their own
//! fine-grained type checks.

use std::fmt;

use crate::environment::Environment;
use crate::errors::{wrong_arg_count, EvalResult};
use crate::executor::Executor;
use crate::value::Value;

/// Operation body: arguments (thunks at lazy positions), the caller's
/// environment, and the evaluator callback.
pub type OperationFn = fn(&[Value], &Environment, &mut dyn Executor) -> EvalResult;

/// Description of one declared argument.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Value used when an optional argument is omitted.
    pub default: Option<Value>,
}

impl ArgInfo {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        ArgInfo {
            name,
            description,
            default: None,
        }
    }
}

/// A named builtin callable.
#[derive(Clone)]
pub struct Operation {
    pub identifier: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    pub description: &'static str,
    /// `Group/Subgroup` text, used for listing only.
    pub category: &'static str,
    pub required: Vec<ArgInfo>,
    pub optional: Vec<ArgInfo>,
    /// Set when any number of trailing arguments is accepted.
    pub variadic: Option<ArgInfo>,
    lazy: Vec<usize>,
    body: OperationFn,
}

impl Operation {
    pub fn new(
        identifier: &'static str,
        name: &'static str,
        category: &'static str,
        body: OperationFn,
    ) -> Self {
        Operation {
            identifier,
            name,
            description: "",
            category,
            required: Vec::new(),
            optional: Vec::new(),
            variadic: None,
            lazy: Vec::new(),
            body,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn required(mut self, name: &'static str, description: &'static str) -> Self {
        self.required.push(ArgInfo::new(name, description));
        self
    }

    /// Optional argument filled with `default` when omitted.
    #[must_use]
    pub fn optional(mut self, name: &'static str, description: &'static str, default: Value) -> Self {
        self.optional.push(ArgInfo {
            name,
            description,
            default: Some(default),
        });
        self
    }

    /// Optional argument with no default; omitting it leaves it absent.
    #[must_use]
    pub fn optional_absent(mut self, name: &'static str, description: &'static str) -> Self {
        self.optional.push(ArgInfo::new(name, description));
        self
    }

    #[must_use]
    pub fn variadic(mut self, name: &'static str, description: &'static str) -> Self {
        self.variadic = Some(ArgInfo::new(name, description));
        self
    }

    /// Positions passed as unevaluated thunks.
    #[must_use]
    pub fn lazy(mut self, positions: &[usize]) -> Self {
        self.lazy.extend_from_slice(positions);
        self.lazy.sort_unstable();
        self.lazy.dedup();
        self
    }

    #[inline]
    pub fn is_lazy(&self, position: usize) -> bool {
        self.lazy.binary_search(&position).is_ok()
    }

    pub fn lazy_positions(&self) -> &[usize] {
        &self.lazy
    }

    #[inline]
    pub fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    #[inline]
    pub fn min_args(&self) -> usize {
        self.required.len()
    }

    /// `None` for variadic operations.
    #[inline]
    pub fn max_args(&self) -> Option<usize> {
        if self.is_variadic() {
            None
        } else {
            Some(self.required.len() + self.optional.len())
        }
    }

    /// Enforce `min_args <= got <= max_args`.
    pub fn check_arity(&self, got: usize) -> Result<(), crate::EvalError> {
        let min = self.min_args();
        let too_few = got < min;
        let too_many = self.max_args().is_some_and(|max| got > max);
        if !too_few && !too_many {
            return Ok(());
        }

        let expected = match self.max_args() {
            None => format!("at least {min} {}", plural(min)),
            Some(max) if max == min => format!("{min} {}", plural(min)),
            Some(max) => format!("{min} to {max} arguments"),
        };
        Err(wrong_arg_count(self.identifier, &expected, got))
    }

    /// Append defaults for omitted optional arguments, in declaration order,
    /// stopping at the first one without a default.
    pub fn fill_defaults(&self, args: &mut Vec<Value>) {
        let supplied_optional = args.len().saturating_sub(self.required.len());
        for info in self.optional.iter().skip(supplied_optional) {
            let Some(default) = &info.default else {
                break;
            };
            args.push(default.clone());
        }
    }

    /// Check arity, fill defaults, and run the body.
    pub fn invoke(
        &self,
        mut args: Vec<Value>,
        env: &Environment,
        executor: &mut dyn Executor,
    ) -> EvalResult {
        self.check_arity(args.len())?;
        self.fill_defaults(&mut args);
        (self.body)(&args, env, executor)
    }

    /// `Name(a, b, [c], rest...)`
    pub fn signature(&self) -> String {
        let mut parts: Vec<String> = self.required.iter().map(|a| a.name.to_string()).collect();
        parts.extend(self.optional.iter().map(|a| format!("[{}]", a.name)));
        if let Some(rest) = &self.variadic {
            parts.push(format!("{}...", rest.name));
        }
        format!("{}({})", self.identifier, parts.join(", "))
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("identifier", &self.identifier)
            .field("category", &self.category)
            .field("required", &self.required.len())
            .field("optional", &self.optional.len())
            .field("variadic", &self.is_variadic())
            .field("lazy", &self.lazy)
            .finish_non_exhaustive()
    }
}
