//! Scope-chain enrichment of log events.

use crate::core::{LogEvent, PropertyFactory};
use crate::scope::ScopeContext;

/// The reserved property name carrying the original unformatted message
/// template. A textual value under this key already lives on the event as
/// the template and is never projected into a structured property.
pub const ORIGINAL_FORMAT_PROPERTY_NAME: &str = "{OriginalFormat}";

/// Trait for enrichers invoked synchronously during event construction.
pub trait Enricher: Send + Sync {
    /// Adds derived properties to the event.
    ///
    /// Called once per emitted event, before the event leaves the emission
    /// pipeline. Enrichment is best effort: it never fails and never aborts
    /// emission.
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory);
}

/// Enriches events with the key/value state of every open scope.
///
/// Traversal runs from the innermost scope outward to the root with
/// add-if-absent insertion, so on a key conflict the innermost scope wins
/// over enclosing scopes, and a property already set on the event before
/// enrichment wins over all scopes.
#[derive(Debug, Clone)]
pub struct ScopeEnricher {
    context: ScopeContext,
}

impl ScopeEnricher {
    /// Creates an enricher observing the given context.
    #[must_use]
    pub fn new(context: ScopeContext) -> Self {
        Self { context }
    }

    /// Returns the observed context.
    #[must_use]
    pub fn context(&self) -> &ScopeContext {
        &self.context
    }
}

impl Enricher for ScopeEnricher {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory) {
        let Some(current) = self.context.current() else {
            return;
        };

        for scope in current.iter() {
            // Only key/value state is projected; scalars, arrays, and other
            // shapes contribute nothing.
            let serde_json::Value::Object(pairs) = scope.state() else {
                tracing::trace!(scope = scope.name(), "skipping non-structured scope state");
                continue;
            };

            for (key, value) in pairs {
                if key == ORIGINAL_FORMAT_PROPERTY_NAME && value.is_string() {
                    continue;
                }
                event.add_property_if_absent(factory.create_property(key, value));
            }
        }
    }
}
