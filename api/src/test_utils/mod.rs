//! Test utilities
//!
//! Fixtures and service wiring for unit tests. The in-memory adapters are
//! the production adapters, so no separate mocks are needed.

pub mod fixtures;
pub mod services;

pub use fixtures::*;
pub use services::*;
