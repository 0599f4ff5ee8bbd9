//! Entity rows and their factories
//!
//! One module per table: each defines the row struct the store writes and
//! a factory that generates a batch of rows from the shared
//! [`crate::fakery::RandomSource`] and [`crate::types::IdGenerator`].
//! Factories never touch the database; the orchestrator hands their
//! output to the store inside a single transaction.

pub mod document;
pub mod document_request;
pub mod official;
pub mod resident;
pub mod user_account;
pub mod voter_application;

pub use document::{DocumentFactory, DocumentRow};
pub use document_request::{DocumentRequestBatch, DocumentRequestFactory, DocumentRequestRow, IssuableRequest};
pub use official::{OfficialFactory, OfficialRow};
pub use resident::{ResidentFactory, ResidentRow, ResidentSummary};
pub use user_account::{UserAccountFactory, UserRow};
pub use voter_application::{VoterApplicationFactory, VoterApplicationRow};
