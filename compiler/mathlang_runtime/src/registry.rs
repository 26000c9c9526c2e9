//! Operation registry: identifier → operation, filled by providers.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::operation::Operation;

/// A cohesive group of operations registered together.
pub trait Provider {
    /// Provider name, e.g. `"Collections"`.
    fn name(&self) -> &'static str;

    /// Every operation this provider offers.
    fn operations(&self) -> Vec<Operation>;
}

/// Table of registered operations.
///
/// Built once by the host and passed to the evaluator; there is no global
/// instance. Registering an identifier that already exists replaces the
/// earlier entry.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    operations: FxHashMap<&'static str, Operation>,
    providers: Vec<&'static str>,
}

impl OperationRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one operation. Returns the entry it replaced, if any.
    pub fn register(&mut self, operation: Operation) -> Option<Operation> {
        let identifier = operation.identifier;
        let replaced = self.operations.insert(identifier, operation);
        if replaced.is_some() {
            tracing::debug!(identifier, "replaced existing operation");
        } else {
            tracing::trace!(identifier, "registered operation");
        }
        replaced
    }

    /// Register every operation of `provider`.
    pub fn register_provider(&mut self, provider: &dyn Provider) {
        let operations = provider.operations();
        let count = operations.len();
        for operation in operations {
            self.register(operation);
        }
        self.providers.push(provider.name());
        tracing::debug!(provider = provider.name(), count, "registered provider");
    }

    #[inline]
    pub fn get(&self, identifier: &str) -> Option<&Operation> {
        self.operations.get(identifier)
    }

    #[inline]
    pub fn contains(&self, identifier: &str) -> bool {
        self.operations.contains_key(identifier)
    }

    /// All operations, sorted by identifier.
    pub fn list_all(&self) -> Vec<&Operation> {
        let mut all: Vec<_> = self.operations.values().collect();
        all.sort_by_key(|op| op.identifier);
        all
    }

    /// Operations grouped by category; each group sorted by identifier.
    pub fn list_by_category(&self) -> BTreeMap<&'static str, Vec<&Operation>> {
        let mut groups: BTreeMap<&'static str, Vec<&Operation>> = BTreeMap::new();
        for op in self.list_all() {
            groups.entry(op.category).or_default().push(op);
        }
        groups
    }

    /// Names of registered providers, in registration order.
    pub fn providers(&self) -> &[&'static str] {
        &self.providers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests;
