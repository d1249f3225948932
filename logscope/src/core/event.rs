//! Log event type mutated by enrichment.

use super::{LogLevel, LogProperty};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A structured log event.
///
/// Events carry a mutable bag of named properties. Enrichment only ever
/// adds properties via [`LogEvent::add_property_if_absent`]; it never
/// removes or overwrites ones already present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// When the event occurred (ISO 8601).
    pub timestamp: String,

    /// The event severity.
    pub level: LogLevel,

    /// The unformatted message template.
    pub message_template: String,

    /// The event properties, keyed by name.
    #[serde(default)]
    properties: HashMap<String, serde_json::Value>,
}

impl LogEvent {
    /// Creates a new log event with no properties.
    #[must_use]
    pub fn new(level: LogLevel, message_template: impl Into<String>) -> Self {
        Self {
            timestamp: crate::utils::iso_timestamp(),
            level,
            message_template: message_template.into(),
            properties: HashMap::new(),
        }
    }

    /// Adds a property, builder style, overwriting any existing value.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Adds a property, overwriting any existing value under that name.
    pub fn add_property(&mut self, property: LogProperty) {
        self.properties.insert(property.name, property.value);
    }

    /// Adds a property only if no property with that name is present.
    ///
    /// This is the first-write-wins insertion enrichment relies on.
    pub fn add_property_if_absent(&mut self, property: LogProperty) {
        self.properties.entry(property.name).or_insert(property.value);
    }

    /// Gets a property value by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }

    /// Checks if a property with the given name is present.
    #[must_use]
    pub fn contains_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns all properties.
    #[must_use]
    pub fn properties(&self) -> &HashMap<String, serde_json::Value> {
        &self.properties
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
