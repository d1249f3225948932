//! # Logscope
//!
//! A scope-stack and enrichment core for bridging a structured-logging
//! front-end to a logging engine that enriches emitted events with ambient
//! context.
//!
//! Logscope provides:
//!
//! - **Scope tracking**: Nested, LIFO scope chains per logical execution
//!   context, with snapshot semantics across concurrent forks
//! - **Event enrichment**: Merging scope-carried key/value state into each
//!   emitted event with add-if-absent precedence
//! - **Guaranteed release**: Guard-based scope closing that fires on every
//!   exit path
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use logscope::prelude::*;
//!
//! let ctx = ScopeContext::new();
//! let enricher = ScopeEnricher::new(ctx.clone());
//!
//! let _request = ctx.open_scope("request", serde_json::json!({"request_id": "abc"}));
//!
//! let mut event = LogEvent::new(LogLevel::Information, "handling {request_id}");
//! enricher.enrich(&mut event, &DefaultPropertyFactory);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod enrich;
pub mod errors;
pub mod scope;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        DefaultPropertyFactory, LogEvent, LogLevel, LogProperty, PropertyFactory,
    };
    pub use crate::enrich::{Enricher, ScopeEnricher, ORIGINAL_FORMAT_PROPERTY_NAME};
    pub use crate::errors::ParseLevelError;
    pub use crate::scope::{ChainIter, Scope, ScopeContext, ScopeGuard};
    pub use crate::utils::{iso_timestamp, Timestamp};
}

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        assert!(true);
    }
}
