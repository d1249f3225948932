//! Per-execution-context scope tracking.

use super::Scope;
use parking_lot::RwLock;
use std::sync::Arc;

type CurrentSlot = Arc<RwLock<Option<Arc<Scope>>>>;

/// Tracks the currently active scope for one logical execution context.
///
/// Cloning a `ScopeContext` yields another handle onto the same logical
/// context. Use [`ScopeContext::fork`] to create an independent context
/// that starts from a snapshot of the current chain, e.g. before spawning
/// concurrent sub-work: scopes opened or closed after the fork are
/// invisible across the fork boundary.
#[derive(Debug, Clone, Default)]
pub struct ScopeContext {
    current: CurrentSlot,
}

impl ScopeContext {
    /// Creates a context with no open scopes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the innermost open scope, or `None` if no scope is open.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Scope>> {
        self.current.read().clone()
    }

    /// Returns the number of currently open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.current().map_or(0, |scope| scope.depth())
    }

    /// Opens a new scope nested inside the current one.
    ///
    /// The returned guard restores the previous chain when closed or
    /// dropped, so the scope is released on every exit path.
    pub fn open_scope(&self, name: impl Into<String>, state: serde_json::Value) -> ScopeGuard {
        let scope = Arc::new(Scope::new(name, state, self.current()));
        tracing::trace!(scope = scope.name(), depth = scope.depth(), "opened scope");
        *self.current.write() = Some(Arc::clone(&scope));
        ScopeGuard {
            slot: Arc::clone(&self.current),
            scope,
            closed: false,
        }
    }

    /// Forks a new logical execution context.
    ///
    /// The fork starts from a snapshot of this context's current chain.
    /// The chain nodes themselves are shared (they are immutable); only the
    /// current pointer diverges.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            current: Arc::new(RwLock::new(self.current())),
        }
    }
}

/// Handle to an open scope; closing restores the enclosing chain.
///
/// Dropping the guard closes the scope, so early returns and panics release
/// it as well. Closing must follow LIFO nesting order; a guard closed while
/// an inner scope is still open resets the context to this scope's parent,
/// which is caller misuse and is deliberately not detected or repaired.
#[derive(Debug)]
pub struct ScopeGuard {
    slot: CurrentSlot,
    scope: Arc<Scope>,
    closed: bool,
}

impl ScopeGuard {
    /// Returns the scope this guard keeps open.
    #[must_use]
    pub fn scope(&self) -> &Arc<Scope> {
        &self.scope
    }

    /// Closes the scope, restoring the enclosing chain as current.
    ///
    /// Equivalent to dropping the guard; calling `close` makes the release
    /// point explicit.
    pub fn close(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        tracing::trace!(scope = self.scope.name(), "closed scope");
        *self.slot.write() = self.scope.parent().cloned();
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
