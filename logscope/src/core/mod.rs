//! Core event model shared between the scope stack and the enricher.
//!
//! This module provides:
//! - The mutable log event with its add-if-absent property bag
//! - The property type and the factory seam used during enrichment
//! - Log severity levels

mod event;
mod level;
mod property;

pub use event::LogEvent;
pub use level::LogLevel;
pub use property::{DefaultPropertyFactory, LogProperty, PropertyFactory};
