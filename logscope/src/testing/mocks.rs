//! Test doubles for the enrichment seams.

use crate::core::{LogProperty, PropertyFactory};
use parking_lot::RwLock;

/// A property factory that records every property it creates.
#[derive(Debug, Default)]
pub struct RecordingPropertyFactory {
    created: RwLock<Vec<LogProperty>>,
}

impl RecordingPropertyFactory {
    /// Creates a new recording factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all properties created so far.
    #[must_use]
    pub fn created(&self) -> Vec<LogProperty> {
        self.created.read().clone()
    }

    /// Returns the number of properties created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.created.read().len()
    }

    /// Returns true if no properties have been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.read().is_empty()
    }

    /// Clears all recorded properties.
    pub fn clear(&self) {
        self.created.write().clear();
    }
}

impl PropertyFactory for RecordingPropertyFactory {
    fn create_property(&self, name: &str, value: &serde_json::Value) -> LogProperty {
        let property = LogProperty::new(name, value.clone());
        self.created.write().push(property.clone());
        property
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_factory() {
        let factory = RecordingPropertyFactory::new();
        assert!(factory.is_empty());

        factory.create_property("a", &serde_json::json!(1));
        factory.create_property("b", &serde_json::json!(2));

        assert_eq!(factory.len(), 2);
        assert_eq!(factory.created()[0].name, "a");

        factory.clear();
        assert!(factory.is_empty());
    }
}
