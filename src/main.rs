// Barangay Mock Data Seeder - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/barangay-seeder
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/barangay-seeder --db /tmp/demo.db --residents 100 --seed 42 --verbose
// ```

use barangay_seeder::seeder::{LoggingConfig, SeedOrchestrator};
use barangay_seeder::store::SeedStore;
use barangay_seeder::types::config::CliArgs;
use barangay_seeder::types::SeederConfig;
use clap::Parser;
use std::fs;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SeederConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting barangay mock data seeder");

    // Load configuration from CLI arguments and optional config file
    let config = match SeederConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the database will not be touched.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run_seeder(&config) {
        error!("Seeding failed: {}", e);
        process::exit(1);
    }

    info!("Barangay mock data seeder completed successfully");
}

/// Open the store and drive one full seeding run.
fn run_seeder(config: &SeederConfig) -> Result<(), String> {
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create database directory: {}", e))?;
        }
    }

    let mut store = SeedStore::open(&config.db_path)
        .map_err(|e| format!("Failed to open database '{}': {}", config.db_path.display(), e))?;

    let orchestrator = SeedOrchestrator::new(config.clone());
    let summary = orchestrator.run(&mut store).map_err(|e| e.to_string())?;

    eprintln!("{}", summary);
    println!(
        "Mock data inserted successfully. All generated users share the password '{}'.",
        config.password
    );
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SeederConfig) {
    eprintln!("Configuration:");
    eprintln!("  Database: {}", config.db_path.display());
    eprintln!("  Residents: {}", config.residents);
    eprintln!("  Users: {}", config.users);
    eprintln!("  Document Requests: {}", config.document_requests);
    eprintln!("  Documents (minimum): {}", config.documents);
    eprintln!("  Voter Applications: {}", config.voter_applications);
    eprintln!("  Officials: {}", config.officials);
    eprintln!("  Reset Before Seeding: {}", config.reset);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
