//! Configuration for the barangay mock data seeder
//!
//! Configuration merges three layers: built-in defaults, an optional JSON
//! configuration file, and command-line flags, with later layers winning.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "barangay_mock.db";

/// Default plaintext password shared by every generated user account.
pub const DEFAULT_PASSWORD: &str = "password";

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "barangay-seeder",
    version,
    about = "Populates a barangay records database with mock data",
    long_about = "Fills the six barangay records tables (residents, users, document \
requests, documents, voter applications, officials) with internally consistent mock rows.

EXAMPLES:
    # Seed with default record counts
    barangay-seeder

    # Reproducible dataset into a scratch database
    barangay-seeder --db /tmp/demo.db --seed 42

    # Wipe existing rows first, then seed a small dataset
    barangay-seeder --reset --residents 10 --users 4

    # Generate a configuration template
    barangay-seeder --print-config > seeder.json

    # Validate configuration without touching the database
    barangay-seeder --config seeder.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments override file settings."
    )]
    pub config: Option<String>,

    /// Path to the SQLite database to populate
    #[arg(long, help = "Path to the SQLite database (default: barangay_mock.db)")]
    pub db: Option<PathBuf>,

    /// Number of resident records to create
    #[arg(
        long,
        help = "Number of resident records to create",
        long_help = "Number of resident records to create. Zero yields an empty dataset: \
every other entity references a resident, so nothing else is generated. Default: 50"
    )]
    pub residents: Option<usize>,

    /// Number of user accounts to create
    #[arg(
        long,
        help = "Number of user accounts to create",
        long_help = "Number of user accounts to create. Each account links to a distinct \
resident, so the effective count is capped at the resident count. Default: 12"
    )]
    pub users: Option<usize>,

    /// Number of document requests to create
    #[arg(long, help = "Number of document requests to create (default: 25)")]
    pub document_requests: Option<usize>,

    /// Minimum number of issued documents to create
    #[arg(
        long,
        help = "Minimum number of issued documents to create",
        long_help = "Minimum number of documents to create. Every ISSUED request always \
produces one document; independent documents are added until this minimum is met. Default: 15"
    )]
    pub documents: Option<usize>,

    /// Number of voter applications to create
    #[arg(long, help = "Number of voter applications to create (default: 15)")]
    pub voter_applications: Option<usize>,

    /// Number of barangay officials to create
    #[arg(
        long,
        help = "Number of barangay officials to create",
        long_help = "Number of barangay officials to create. Officials are drawn from the \
resident pool without repetition, so the effective count is capped at the resident count. \
Default: 8"
    )]
    pub officials: Option<usize>,

    /// Random seed for reproducible data
    #[arg(long, help = "Random seed for reproducible data")]
    pub seed: Option<u64>,

    /// Delete existing rows before seeding
    #[arg(long, help = "Delete existing rows before seeding")]
    pub reset: bool,

    /// Plaintext password applied to every generated user
    #[arg(
        long,
        help = "Plaintext password applied to every generated user (default: password)"
    )]
    pub password: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without seeding
    #[arg(long, help = "Validate configuration without touching the database")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Path to the SQLite database to populate
    pub db: Option<PathBuf>,
    /// Number of resident records to create
    pub residents: Option<usize>,
    /// Number of user accounts to create
    pub users: Option<usize>,
    /// Number of document requests to create
    pub document_requests: Option<usize>,
    /// Minimum number of issued documents to create
    pub documents: Option<usize>,
    /// Number of voter applications to create
    pub voter_applications: Option<usize>,
    /// Number of barangay officials to create
    pub officials: Option<usize>,
    /// Random seed for reproducible data
    pub seed: Option<u64>,
    /// Delete existing rows before seeding
    pub reset: Option<bool>,
    /// Plaintext password applied to every generated user
    pub password: Option<String>,
}

/// Effective configuration for a seeding run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    /// Path to the SQLite database to populate
    pub db_path: PathBuf,
    /// Number of resident records to create
    pub residents: usize,
    /// Number of user accounts to create (capped at the resident count)
    pub users: usize,
    /// Number of document requests to create
    pub document_requests: usize,
    /// Minimum number of documents to create
    pub documents: usize,
    /// Number of voter applications to create
    pub voter_applications: usize,
    /// Number of barangay officials to create (capped at the resident count)
    pub officials: usize,
    /// Random seed for reproducible data
    pub seed: Option<u64>,
    /// Delete existing rows before seeding
    pub reset: bool,
    /// Plaintext password applied to every generated user
    pub password: String,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            residents: 50,
            users: 12,
            document_requests: 25,
            documents: 15,
            voter_applications: 15,
            officials: 8,
            seed: None,
            reset: false,
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// A configuration value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl SeederConfig {
    /// Create configuration from parsed CLI arguments, merging an optional
    /// configuration file over the defaults first.
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = if let Some(config_path) = &args.config {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        Self::apply_cli_overrides(&mut config, args);
        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Merge a partial configuration file over the defaults.
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            db_path: config_file.db.unwrap_or(defaults.db_path),
            residents: config_file.residents.unwrap_or(defaults.residents),
            users: config_file.users.unwrap_or(defaults.users),
            document_requests: config_file
                .document_requests
                .unwrap_or(defaults.document_requests),
            documents: config_file.documents.unwrap_or(defaults.documents),
            voter_applications: config_file
                .voter_applications
                .unwrap_or(defaults.voter_applications),
            officials: config_file.officials.unwrap_or(defaults.officials),
            seed: config_file.seed.or(defaults.seed),
            reset: config_file.reset.unwrap_or(defaults.reset),
            password: config_file.password.unwrap_or(defaults.password),
        }
    }

    /// Apply CLI argument overrides to configuration (CLI takes precedence).
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.db {
            config.db_path = value;
        }
        if let Some(value) = args.residents {
            config.residents = value;
        }
        if let Some(value) = args.users {
            config.users = value;
        }
        if let Some(value) = args.document_requests {
            config.document_requests = value;
        }
        if let Some(value) = args.documents {
            config.documents = value;
        }
        if let Some(value) = args.voter_applications {
            config.voter_applications = value;
        }
        if let Some(value) = args.officials {
            config.officials = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if args.reset {
            config.reset = true;
        }
        if let Some(value) = args.password {
            config.password = value;
        }
    }

    /// Print configuration as pretty JSON.
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters.
    ///
    /// Counts are unsigned so they need no range checks; zero counts are
    /// legal (zero residents short-circuits the whole pipeline).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.password.is_empty() {
            return Err(ConfigError::Invalid(
                "password must not be empty (every generated user shares it)".to_string(),
            ));
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("database path must not be empty".to_string()));
        }
        Ok(())
    }
}
