//! Event fixtures for tests.

use crate::core::{LogEvent, LogLevel, LogProperty};

/// Builds an information-level event with the given template.
#[must_use]
pub fn info_event(template: &str) -> LogEvent {
    LogEvent::new(LogLevel::Information, template)
}

/// Builds an event pre-populated with the given properties.
#[must_use]
pub fn event_with_properties(
    template: &str,
    properties: &[(&str, serde_json::Value)],
) -> LogEvent {
    let mut event = info_event(template);
    for (name, value) in properties {
        event.add_property(LogProperty::new(*name, value.clone()));
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_event() {
        let event = info_event("hello");
        assert_eq!(event.level, LogLevel::Information);
        assert_eq!(event.property_count(), 0);
    }

    #[test]
    fn test_event_with_properties() {
        let event = event_with_properties("msg", &[("a", serde_json::json!(1))]);
        assert_eq!(event.property("a"), Some(&serde_json::json!(1)));
    }
}
