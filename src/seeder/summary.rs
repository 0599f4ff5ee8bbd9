//! Run summary reporting

use serde::{Deserialize, Serialize};
use std::fmt;

/// What one seeding run wrote, per table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    /// Residents inserted.
    pub residents: usize,
    /// User accounts inserted.
    pub users: usize,
    /// Document requests inserted.
    pub document_requests: usize,
    /// Documents inserted.
    pub documents: usize,
    /// Voter applications inserted.
    pub voter_applications: usize,
    /// Barangay officials inserted.
    pub officials: usize,
    /// The seed the run used, when one was fixed.
    pub seed: Option<u64>,
}

impl SeedSummary {
    /// Total rows inserted across all tables.
    pub fn total_rows(&self) -> usize {
        self.residents
            + self.users
            + self.document_requests
            + self.documents
            + self.voter_applications
            + self.officials
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seeding Summary:")?;
        writeln!(f, "  Residents:          {}", self.residents)?;
        writeln!(f, "  Users:              {}", self.users)?;
        writeln!(f, "  Document requests:  {}", self.document_requests)?;
        writeln!(f, "  Documents:          {}", self.documents)?;
        writeln!(f, "  Voter applications: {}", self.voter_applications)?;
        writeln!(f, "  Officials:          {}", self.officials)?;
        writeln!(f, "  Total rows:         {}", self.total_rows())?;
        match self.seed {
            Some(seed) => write!(f, "  Seed:               {}", seed),
            None => write!(f, "  Seed:               (entropy)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_rows_sums_all_tables() {
        let summary = SeedSummary {
            residents: 50,
            users: 12,
            document_requests: 25,
            documents: 15,
            voter_applications: 15,
            officials: 8,
            seed: Some(42),
        };
        assert_eq!(summary.total_rows(), 125);
    }

    #[test]
    fn test_display_mentions_every_table_and_seed() {
        let summary = SeedSummary { residents: 5, seed: Some(42), ..Default::default() };
        let text = summary.to_string();

        assert!(text.contains("Residents:          5"));
        assert!(text.contains("Voter applications: 0"));
        assert!(text.contains("Seed:               42"));
    }

    #[test]
    fn test_display_marks_entropy_runs() {
        let summary = SeedSummary::default();
        assert!(summary.to_string().contains("(entropy)"));
    }
}
