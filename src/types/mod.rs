//! Core domain types for the barangay seeder
//!
//! Configuration, domain enumerations, identifier minting, and the
//! timestamp helpers shared by every generator.

pub mod clock;
pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{CliArgs, ConfigError, ConfigFile, SeederConfig};
pub use enums::{
    ApplicationStatus, ApplicationType, CivilStatus, DocumentType, EducationLevel,
    EmploymentStatus, Gender, IncomeBracket, OfficialPosition, RequestStatus, UserRole,
};
pub use identifiers::IdGenerator;
