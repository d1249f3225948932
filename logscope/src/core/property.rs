//! Log event properties and the factory seam used during enrichment.

use serde::{Deserialize, Serialize};

/// A named structured value attached to a log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogProperty {
    /// The property name.
    pub name: String,
    /// The property value.
    pub value: serde_json::Value,
}

impl LogProperty {
    /// Creates a new property.
    #[must_use]
    pub fn new(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Trait for constructing properties during enrichment.
///
/// The enricher never inserts raw key/value pairs directly; every property
/// passes through a factory supplied by the log pipeline, which may
/// normalize, intern, or destructure values before they land on the event.
pub trait PropertyFactory: Send + Sync {
    /// Creates a property from a name and value.
    fn create_property(&self, name: &str, value: &serde_json::Value) -> LogProperty;
}

/// A property factory that carries the name and value through unchanged.
///
/// Used when the consuming pipeline has no value normalization of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyFactory;

impl PropertyFactory for DefaultPropertyFactory {
    fn create_property(&self, name: &str, value: &serde_json::Value) -> LogProperty {
        LogProperty::new(name, value.clone())
    }
}
