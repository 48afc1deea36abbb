//! Request-scoped context values
//!
//! A [`RequestContext`] carries string-keyed values attached to a single
//! call, typically derived from transport metadata. Contexts are never
//! mutated in place: deriving a new value produces a new context, so a
//! context handed to another component stays stable.

use std::collections::HashMap;

/// Immutable string-keyed value map scoped to a single request
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        RequestContext::default()
    }

    /// Derive a context with one additional entry
    ///
    /// The receiver is left untouched; an existing entry under the same
    /// key is shadowed in the derived context.
    pub fn with_value<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = self.values.clone();
        values.insert(key.into(), value.into());
        RequestContext { values }
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether an entry exists for the key
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_value_leaves_parent_untouched() {
        let parent = RequestContext::new();
        let child = parent.with_value("user-id", "42");

        assert!(parent.is_empty());
        assert_eq!(child.get("user-id"), Some("42"));
    }

    #[test]
    fn test_with_value_shadows_existing_key() {
        let ctx = RequestContext::new().with_value("tenant", "a");
        let derived = ctx.with_value("tenant", "b");

        assert_eq!(ctx.get("tenant"), Some("a"));
        assert_eq!(derived.get("tenant"), Some("b"));
        assert_eq!(derived.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let ctx = RequestContext::new().with_value("user-id", "42");
        assert_eq!(ctx.get("request-id"), None);
        assert!(!ctx.contains("request-id"));
    }
}
