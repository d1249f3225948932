//! Enrichment of log events from ambient scope state.

mod enricher;

pub use enricher::{Enricher, ScopeEnricher, ORIGINAL_FORMAT_PROPERTY_NAME};
