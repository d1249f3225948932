//! Immutable scope chain nodes.

use std::sync::Arc;

/// A single node in a scope chain.
///
/// A scope is immutable once constructed: opening a scope creates a new
/// innermost node pointing at the previous chain, and closing restores the
/// previous chain without mutating any node. That makes an `Arc<Scope>`
/// safe to share across concurrently diverged chains without locking, and a
/// node stays alive exactly as long as some still-open chain (including a
/// fork-time snapshot in another context) can reach it.
#[derive(Debug)]
pub struct Scope {
    /// The scope label.
    name: String,
    /// Arbitrary state carried by the scope.
    state: serde_json::Value,
    /// The enclosing scope, or `None` for the outermost.
    parent: Option<Arc<Scope>>,
}

impl Scope {
    pub(crate) fn new(
        name: impl Into<String>,
        state: serde_json::Value,
        parent: Option<Arc<Scope>>,
    ) -> Self {
        Self {
            name: name.into(),
            state,
            parent,
        }
    }

    /// Returns the scope label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the state carried by this scope.
    #[must_use]
    pub fn state(&self) -> &serde_json::Value {
        &self.state
    }

    /// Returns the enclosing scope, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Scope>> {
        self.parent.as_ref()
    }

    /// Returns the number of scopes from this node to the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Iterates the chain from this (innermost) scope outward to the root.
    #[must_use]
    pub fn iter(self: &Arc<Self>) -> ChainIter {
        ChainIter {
            next: Some(Arc::clone(self)),
        }
    }
}

/// Iterator over a scope chain, innermost to root.
#[derive(Debug)]
pub struct ChainIter {
    next: Option<Arc<Scope>>,
}

impl Iterator for ChainIter {
    type Item = Arc<Scope>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent().cloned();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_accessors() {
        let scope = Scope::new("request", serde_json::json!({"id": 1}), None);
        assert_eq!(scope.name(), "request");
        assert_eq!(scope.state(), &serde_json::json!({"id": 1}));
        assert!(scope.parent().is_none());
    }

    #[test]
    fn test_scope_depth() {
        let root = Arc::new(Scope::new("root", serde_json::json!(null), None));
        let middle = Arc::new(Scope::new("middle", serde_json::json!(null), Some(root)));
        let inner = Scope::new("inner", serde_json::json!(null), Some(middle));

        assert_eq!(inner.depth(), 3);
    }

    #[test]
    fn test_chain_iter_innermost_first() {
        let root = Arc::new(Scope::new("root", serde_json::json!(null), None));
        let inner = Arc::new(Scope::new("inner", serde_json::json!(null), Some(root)));

        let names: Vec<String> = inner.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["inner", "root"]);
    }

    #[test]
    fn test_chain_shared_parent() {
        let root = Arc::new(Scope::new("root", serde_json::json!(null), None));
        let left = Arc::new(Scope::new("left", serde_json::json!(null), Some(Arc::clone(&root))));
        let right = Arc::new(Scope::new("right", serde_json::json!(null), Some(Arc::clone(&root))));

        assert!(Arc::ptr_eq(left.parent().unwrap(), right.parent().unwrap()));
    }
}
