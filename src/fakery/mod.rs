//! Randomness and fake-value generation
//!
//! All randomness used by the seeder flows through one [`RandomSource`],
//! which owns a seedable RNG and a pluggable [`ValueProvider`] for
//! locale-flavoured values. When the provider cannot produce a value kind
//! (the English faker knows nothing about Philippine geography), the
//! source falls back to built-in static candidate lists without surfacing
//! an error.

pub mod provider;
pub mod source;

pub use provider::{FakerProvider, ValueProvider};
pub use source::RandomSource;
