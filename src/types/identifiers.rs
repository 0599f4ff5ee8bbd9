//! Counter-based identifier generation
//!
//! Counter-based entities get human-readable identifiers of the form
//! `<prefix>-<year>-<zero-padded counter>`. Counters start at 1, advance
//! monotonically per entity type, and guarantee uniqueness within a run.
//! Cross-run uniqueness is explicitly not a goal — this is mock data, not
//! production key allocation.

use crate::types::clock;
use crate::types::DocumentType;

/// Mints prefixed, year-stamped identifiers from per-entity counters.
#[derive(Debug)]
pub struct IdGenerator {
    year: i32,
    residents: u64,
    requests: u64,
    documents: u64,
    applications: u64,
}

impl IdGenerator {
    /// Create a generator stamped with the current calendar year.
    pub fn new() -> Self {
        Self::for_year(clock::current_year())
    }

    /// Create a generator stamped with a fixed year.
    pub fn for_year(year: i32) -> Self {
        Self { year, residents: 0, requests: 0, documents: 0, applications: 0 }
    }

    /// Next resident identifier: `BR-<year>-<10 digits>`.
    pub fn next_resident(&mut self) -> String {
        self.residents += 1;
        format!("BR-{}-{:010}", self.year, self.residents)
    }

    /// Next document-request identifier: `REQ-<year>-<6 digits>`.
    pub fn next_request(&mut self) -> String {
        self.requests += 1;
        format!("REQ-{}-{:06}", self.year, self.requests)
    }

    /// Next document reference: `<type prefix>-<year>-<10 digits>`.
    ///
    /// The counter is shared across all document types, so references stay
    /// unique even when types repeat.
    pub fn next_document(&mut self, doc_type: DocumentType) -> String {
        self.documents += 1;
        format!("{}-{}-{:010}", doc_type.reference_prefix(), self.year, self.documents)
    }

    /// Next voter-application identifier: `VA-<year>-<5 digits>`.
    pub fn next_application(&mut self) -> String {
        self.applications += 1;
        format!("VA-{}-{:05}", self.year, self.applications)
    }

    /// How many voter applications have been minted so far. The slip
    /// reference on a scheduled appointment reuses this ordinal.
    pub fn application_count(&self) -> u64 {
        self.applications
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
