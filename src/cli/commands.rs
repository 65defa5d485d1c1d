//! Non-interactive subcommands
//!
//! Each subcommand runs one operation against the registry and exits,
//! making the tool scriptable alongside the interactive menu.

use clap::Subcommand;

use crate::config::{Settings, WattagePaths};
use crate::display::{format_appliance_list, format_energy_summary, format_search_results};
use crate::error::{WattageError, WattageResult};
use crate::models::Registry;
use crate::reports::BillingReport;
use crate::services::{ApplianceService, QueryService};
use crate::storage::RegistryStore;

/// wattage subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Register a new appliance
    Add {
        /// Appliance name (must not contain '|')
        name: String,
        /// Rated power in watts
        #[arg(allow_negative_numbers = true)]
        power: f64,
        /// Usage hours per day (0 - 24)
        #[arg(allow_negative_numbers = true)]
        hours: f64,
    },
    /// List all registered appliances
    List,
    /// Search appliances by name (case-insensitive substring match)
    Search {
        /// Search term
        query: String,
    },
    /// Show the energy summary (kWh/day)
    Summary,
    /// Generate the billing report and save it to the billing file
    Bill {
        /// Tariff (cost per kWh); falls back to the configured default
        #[arg(allow_negative_numbers = true)]
        tariff: Option<f64>,
    },
    /// Show current configuration and paths
    Config,
}

/// Handle a subcommand
pub fn handle_command(
    registry: &mut Registry,
    store: &RegistryStore,
    paths: &WattagePaths,
    settings: &Settings,
    cmd: Commands,
) -> WattageResult<()> {
    match cmd {
        Commands::Add { name, power, hours } => {
            let appliance = ApplianceService::new(registry).register(&name, power, hours)?;
            println!("Registered appliance: {}", appliance);

            // A failed save is reported but never discards the in-memory entry
            if let Err(e) = store.save(registry) {
                eprintln!("Warning: failed to save registry: {}", e);
            }
        }

        Commands::List => {
            print!("{}", format_appliance_list(registry));
        }

        Commands::Search { query } => {
            // Empty queries are invalid regardless of registry contents
            let matches = QueryService::new(registry).search(&query)?;

            if registry.is_empty() {
                println!("No appliances registered.");
            } else {
                print!("{}", format_search_results(&matches, &query));
            }
        }

        Commands::Summary => {
            let summary = QueryService::new(registry).energy_summary();
            print!("{}", format_energy_summary(&summary));
        }

        Commands::Bill { tariff } => {
            if registry.is_empty() {
                println!("No appliances registered.");
                return Ok(());
            }

            let tariff = tariff.or(settings.default_tariff).ok_or_else(|| {
                WattageError::Validation(
                    "No tariff given and no default_tariff configured".into(),
                )
            })?;

            let report = BillingReport::generate(registry, tariff)?;
            print!("{}", report.format_text());

            match report.save_to(paths.billing_file()) {
                Ok(()) => println!(
                    "Billing summary saved to {}",
                    paths.billing_file().display()
                ),
                Err(e) => eprintln!("Warning: failed to save billing summary: {}", e),
            }
        }

        Commands::Config => {
            println!("wattage-cli Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Registry file:   {}", paths.registry_file().display());
            println!("Billing file:    {}", paths.billing_file().display());
            println!();
            println!("Settings:");
            match settings.default_tariff {
                Some(t) => println!("  Default tariff: {}", t),
                None => println!("  Default tariff: (not set)"),
            }
        }
    }

    Ok(())
}
