//! Barangay Mock Data Seeder
//!
//! A batch tool that fills a barangay records SQLite database with
//! internally consistent mock rows across six related entity types:
//! residents, user accounts, document requests, issued documents,
//! voter-registration applications, and barangay officials.
//!
//! # Overview
//!
//! The interesting part is the pipeline, not any single insert:
//!
//! - **Deterministic identifiers**: every counter-based entity gets a
//!   human-readable, year-stamped, zero-padded identifier unique within
//!   the run.
//! - **Status-conditional fields**: a row's optional columns depend on the
//!   state it is generated in (a PENDING request has no reviewer, a
//!   SCHEDULED voter application always has an appointment).
//! - **Referential consistency**: every foreign key points at a row
//!   created earlier in the same run, and all writes land in one
//!   transaction — either all six tables are populated or none are.
//! - **Reproducibility**: all randomness flows through one
//!   [`fakery::RandomSource`], so a fixed `--seed` replays the same
//!   dataset.
//!
//! # Quick start
//!
//! ```no_run
//! use barangay_seeder::seeder::SeedOrchestrator;
//! use barangay_seeder::store::SeedStore;
//! use barangay_seeder::types::SeederConfig;
//!
//! let config = SeederConfig::default();
//! let mut store = SeedStore::open(&config.db_path)?;
//! let summary = SeedOrchestrator::new(config).run(&mut store)?;
//! println!("{summary}");
//! # Ok::<(), barangay_seeder::seeder::SeederError>(())
//! ```
//!
//! # Module organization
//!
//! - [`types`]: configuration, domain enumerations, identifier generation,
//!   and timestamp helpers
//! - [`fakery`]: the value-provider capability interface and the seedable
//!   randomness source with its locale fallback chain
//! - [`entities`]: row structs and one factory per entity type
//! - [`store`]: SQLite schema, bulk inserts, and the transaction scope
//! - [`seeder`]: orchestration, error handling, logging, and the run
//!   summary

#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod entities;
pub mod fakery;
pub mod seeder;
pub mod store;
pub mod types;

// Re-export the types a caller needs to drive a full run.

pub use fakery::{FakerProvider, RandomSource, ValueProvider};
pub use seeder::{LoggingConfig, SeedOrchestrator, SeedSummary, SeederError, SeederResult};
pub use store::{SeedStore, SeedTransaction};
pub use types::{
    ApplicationStatus, ApplicationType, CivilStatus, CliArgs, ConfigError, DocumentType,
    EducationLevel, EmploymentStatus, Gender, IdGenerator, IncomeBracket, OfficialPosition,
    RequestStatus, SeederConfig, UserRole,
};
