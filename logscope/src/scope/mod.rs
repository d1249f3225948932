//! Scope tracking for logical execution contexts.
//!
//! This module provides:
//! - Immutable scope chain nodes shared across diverged contexts
//! - Per-context tracking of the currently active scope
//! - Guard-based closing that restores the enclosing chain on every exit path

mod chain;
mod context;

pub use chain::{ChainIter, Scope};
pub use context::{ScopeContext, ScopeGuard};
