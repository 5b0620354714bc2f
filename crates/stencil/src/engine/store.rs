//! Ordered variable store for template bindings.

use crate::types::Value;

/// Holds identifier-to-value bindings for the variable pass.
///
/// Iteration order is insertion order, and reassigning an existing key
/// replaces its value in place without moving it. There is no removal
/// operation: bindings persist until overwritten or the engine is dropped.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    bindings: Vec<(String, Value)>,
}

impl VariableStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the binding for `key`. Always succeeds.
    pub fn assign(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.bindings.iter_mut().find(|entry| entry.0 == key) {
            slot.1 = value;
        } else {
            self.bindings.push((key, value));
        }
    }

    /// Apply [`assign`](Self::assign) for every pair, in iteration order.
    /// A no-op for an empty iterator.
    pub fn assign_many<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            self.assign(key, value);
        }
    }

    /// Look up a binding by exact key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|entry| entry.0 == key)
            .map(|entry| &entry.1)
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Bound identifiers in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(k, _)| k.as_str())
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no bindings are held.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
