//! Operator registry
//!
//! Maps operator names to implementations. The registry is filled by the
//! embedder before evaluation starts and is only read while rules are being
//! evaluated. Names are not validated: any string, including the empty
//! string, is a valid key. Registering a name twice replaces the earlier
//! operator.

use crate::operator::{Operator, OperatorRef};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name-to-operator mapping consulted at every operator node.
#[derive(Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<String, OperatorRef>,
}

impl OperatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Register an operator under `name`.
    ///
    /// If an operator with the same name already exists it is replaced and
    /// returned, so callers that want to reject duplicates can do so.
    pub fn register<O>(&mut self, name: impl Into<String>, operator: O) -> Option<OperatorRef>
    where
        O: Operator + 'static,
    {
        self.register_shared(name, Arc::new(operator))
    }

    /// Register an already shared operator handle under `name`.
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        operator: OperatorRef,
    ) -> Option<OperatorRef> {
        let name = name.into();
        let previous = self.operators.insert(name.clone(), operator);
        tracing::debug!(
            operator = %name,
            replaced = previous.is_some(),
            total = self.operators.len(),
            "Operator registered"
        );
        previous
    }

    /// Look up the operator registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<&OperatorRef> {
        self.operators.get(name)
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Remove the operator registered under `name`, returning it.
    pub fn remove(&mut self, name: &str) -> Option<OperatorRef> {
        let removed = self.operators.remove(name);
        if removed.is_some() {
            tracing::debug!(operator = %name, "Operator removed");
        }
        removed
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if no operators are registered.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Registered operator names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operators", &self.names())
            .finish()
    }
}
