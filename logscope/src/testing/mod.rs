//! Testing utilities for scope and enrichment code.
//!
//! This module provides:
//! - A recording property factory for asserting what enrichment touched
//! - Event fixtures for building pre-populated events

mod fixtures;
mod mocks;

pub use fixtures::{event_with_properties, info_event};
pub use mocks::RecordingPropertyFactory;
