//! The seeding pipeline
//!
//! [`SeedOrchestrator`] drives one run end to end: schema, optional
//! reset, one shared password hash, then the six factories in foreign
//! key order. All rows are generated in memory first and written under a
//! single transaction, so a failure at any point leaves the database
//! untouched.

use crate::entities::{
    DocumentFactory, DocumentRequestFactory, OfficialFactory, ResidentFactory, ResidentSummary,
    UserAccountFactory, VoterApplicationFactory,
};
use crate::fakery::RandomSource;
use crate::seeder::error::SeederResult;
use crate::seeder::summary::SeedSummary;
use crate::store::SeedStore;
use crate::types::{IdGenerator, SeederConfig};
use tracing::{debug, info};

/// Bcrypt cost factor for the shared password hash.
const BCRYPT_COST: u32 = 10;

/// Drives a complete seeding run against one store.
#[derive(Debug)]
pub struct SeedOrchestrator {
    config: SeederConfig,
}

impl SeedOrchestrator {
    /// Create an orchestrator for a validated configuration.
    pub fn new(config: SeederConfig) -> Self {
        Self { config }
    }

    /// The configuration this orchestrator runs with.
    pub fn config(&self) -> &SeederConfig {
        &self.config
    }

    /// Run the full pipeline and commit the result.
    pub fn run(&self, store: &mut SeedStore) -> SeederResult<SeedSummary> {
        info!(
            residents = self.config.residents,
            users = self.config.users,
            seed = ?self.config.seed,
            "starting seeding run"
        );

        store.ensure_schema()?;
        if self.config.reset {
            store.reset_tables()?;
            info!("existing rows cleared");
        }

        // One hash for all accounts; bcrypt at this cost is too slow to
        // run once per user.
        let password_hash = bcrypt::hash(&self.config.password, BCRYPT_COST)?;

        let mut src = match self.config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        };
        let mut ids = IdGenerator::new();

        let residents = ResidentFactory::generate(self.config.residents, &mut src, &mut ids);
        let summaries: Vec<ResidentSummary> = residents.iter().map(|r| r.summary()).collect();
        debug!(count = residents.len(), "generated residents");

        let users =
            UserAccountFactory::generate(&summaries, self.config.users, &password_hash, &mut src);
        if users.len() < self.config.users {
            debug!(
                requested = self.config.users,
                effective = users.len(),
                "user count capped by resident pool"
            );
        }

        let requests =
            DocumentRequestFactory::generate(&summaries, self.config.document_requests, &mut src, &mut ids);
        debug!(count = requests.rows.len(), issuable = requests.issuable.len(), "generated document requests");

        let documents = DocumentFactory::generate(
            &summaries,
            &requests.issuable,
            self.config.documents,
            &mut src,
            &mut ids,
        );

        let applications = VoterApplicationFactory::generate(
            &summaries,
            self.config.voter_applications,
            &mut src,
            &mut ids,
        );

        let officials = OfficialFactory::generate(&summaries, self.config.officials, &mut src);
        if officials.len() < self.config.officials && !summaries.is_empty() {
            debug!(
                requested = self.config.officials,
                effective = officials.len(),
                "official count capped by resident pool"
            );
        }

        let summary = SeedSummary {
            residents: residents.len(),
            users: users.len(),
            document_requests: requests.rows.len(),
            documents: documents.len(),
            voter_applications: applications.len(),
            officials: officials.len(),
            seed: self.config.seed,
        };

        let tx = store.begin()?;
        tx.insert_residents(&residents)?;
        tx.insert_users(&users)?;
        tx.insert_document_requests(&requests.rows)?;
        tx.insert_documents(&documents)?;
        tx.insert_voter_applications(&applications)?;
        tx.insert_officials(&officials)?;
        tx.commit()?;

        info!(total_rows = summary.total_rows(), "seeding run committed");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(residents: usize, seed: u64) -> SeederConfig {
        SeederConfig {
            residents,
            users: 3,
            document_requests: 6,
            documents: 4,
            voter_applications: 5,
            officials: 2,
            seed: Some(seed),
            ..SeederConfig::default()
        }
    }

    #[test]
    fn test_run_populates_every_table() {
        let mut store = SeedStore::open_in_memory().unwrap();
        let summary = SeedOrchestrator::new(config(10, 42)).run(&mut store).unwrap();

        assert_eq!(summary.residents, 10);
        assert_eq!(summary.users, 3);
        assert_eq!(summary.document_requests, 6);
        assert!(summary.documents >= 4);
        assert_eq!(summary.voter_applications, 5);
        assert_eq!(summary.officials, 2);

        assert_eq!(store.table_count("residents").unwrap() as usize, summary.residents);
        assert_eq!(store.table_count("documents").unwrap() as usize, summary.documents);
    }

    #[test]
    fn test_zero_residents_short_circuits_dependents() {
        let mut store = SeedStore::open_in_memory().unwrap();
        let summary = SeedOrchestrator::new(config(0, 42)).run(&mut store).unwrap();

        assert_eq!(summary.total_rows(), 0);
        for table in crate::store::schema::TABLES_CHILD_FIRST {
            assert_eq!(store.table_count(table).unwrap(), 0, "{} not empty", table);
        }
    }

    #[test]
    fn test_reset_replaces_previous_rows() {
        let mut store = SeedStore::open_in_memory().unwrap();
        SeedOrchestrator::new(config(10, 1)).run(&mut store).unwrap();

        let mut with_reset = config(4, 2);
        with_reset.reset = true;
        let summary = SeedOrchestrator::new(with_reset).run(&mut store).unwrap();

        assert_eq!(summary.residents, 4);
        assert_eq!(store.table_count("residents").unwrap(), 4);
    }

    #[test]
    fn test_runs_without_reset_accumulate() {
        let mut store = SeedStore::open_in_memory().unwrap();
        SeedOrchestrator::new(config(5, 1)).run(&mut store).unwrap();
        SeedOrchestrator::new(config(5, 2)).run(&mut store).unwrap();

        assert_eq!(store.table_count("residents").unwrap(), 10);
    }

    #[test]
    fn test_password_hash_verifies_for_every_user() {
        let mut store = SeedStore::open_in_memory().unwrap();
        let mut cfg = config(5, 7);
        cfg.password = "letmein".to_string();
        SeedOrchestrator::new(cfg).run(&mut store).unwrap();

        let hashes: Vec<String> = store
            .connection()
            .prepare("SELECT DISTINCT password_hash FROM users")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        // One shared hash, and it matches the configured password.
        assert_eq!(hashes.len(), 1);
        assert!(bcrypt::verify("letmein", &hashes[0]).unwrap());
    }
}
