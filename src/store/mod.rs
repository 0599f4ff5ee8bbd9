//! SQLite persistence for the generated dataset
//!
//! [`schema`] holds the table definitions; [`sqlite`] wraps the
//! connection, the reset pass, and the bulk inserts behind a single
//! transaction scope.

pub mod schema;
pub mod sqlite;

pub use sqlite::{SeedStore, SeedTransaction};
