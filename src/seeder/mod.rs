//! Seeding orchestration
//!
//! This module wires the factories, the store, and the ambient concerns
//! together: [`SeedOrchestrator`] drives a full run, [`SeederError`]
//! unifies everything that can go wrong, [`LoggingConfig`] sets up
//! tracing, and [`SeedSummary`] reports what was written.

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod summary;

pub use error::{SeederError, SeederResult};
pub use logging::LoggingConfig;
pub use orchestrator::SeedOrchestrator;
pub use summary::SeedSummary;
