//! Interactive menu loop
//!
//! The classic numbered menu over the same services the subcommands use.
//! Invalid input re-prompts rather than failing; the registry is saved after
//! every registration and once more on exit. End-of-input is treated as an
//! orderly exit so the final save still runs.

use std::io::{self, BufRead, Write};

use crate::config::{Settings, WattagePaths};
use crate::display::{format_appliance_list, format_energy_summary, format_search_results};
use crate::error::WattageResult;
use crate::models::Registry;
use crate::reports::BillingReport;
use crate::services::{ApplianceService, QueryService};
use crate::storage::RegistryStore;

/// Run the interactive menu until the user exits
pub fn run(
    registry: &mut Registry,
    store: &RegistryStore,
    paths: &WattagePaths,
    settings: &Settings,
) -> WattageResult<()> {
    loop {
        print_menu();

        let Some(choice) = prompt("Choose: ") else {
            break;
        };

        match choice.trim() {
            "1" => {
                if register_appliance(registry, store).is_none() {
                    break;
                }
            }
            "2" => print!("{}", format_appliance_list(registry)),
            "3" => {
                if search_appliances(registry).is_none() {
                    break;
                }
            }
            "4" => {
                let summary = QueryService::new(registry).energy_summary();
                print!("{}", format_energy_summary(&summary));
            }
            "5" => {
                if billing_summary(registry, paths, settings).is_none() {
                    break;
                }
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }

    if let Err(e) = store.save(registry) {
        eprintln!("Warning: failed to save registry: {}", e);
    }
    println!("Goodbye!");
    Ok(())
}

fn print_menu() {
    println!();
    println!("==============================");
    println!("   Electrical Load Monitoring");
    println!("==============================");
    println!("1. Register appliance");
    println!("2. View all appliances");
    println!("3. Search appliance by name");
    println!("4. Energy summary (kWh/day)");
    println!("5. Billing summary (save to file)");
    println!("0. Exit");
}

/// Collect and register one appliance; `None` means input ended
fn register_appliance(registry: &mut Registry, store: &RegistryStore) -> Option<()> {
    let name = loop {
        let name = prompt("Enter appliance name: ")?;
        if name.is_empty() {
            println!("Name must not be empty.");
        } else if name.contains('|') {
            println!("Name must not contain '|'.");
        } else {
            break name;
        }
    };

    let power = prompt_number(
        "Enter power rating (W): ",
        |v| v > 0.0,
        "Power must be a number greater than zero.",
    )?;

    let hours = prompt_number(
        "Enter usage hours per day (0 - 24): ",
        |v| (0.0..=24.0).contains(&v),
        "Hours must be a number between 0 and 24.",
    )?;

    match ApplianceService::new(registry).register(&name, power, hours) {
        Ok(_) => {
            if let Err(e) = store.save(registry) {
                eprintln!("Warning: failed to save registry: {}", e);
            }
            println!("Appliance registered successfully!");
        }
        // The prompts above enforce the same rules, so this is unreachable
        // in practice, but the service stays the single validation source.
        Err(e) => println!("{}", e),
    }

    Some(())
}

/// Search flow; `None` means input ended
fn search_appliances(registry: &Registry) -> Option<()> {
    if registry.is_empty() {
        println!("No appliances registered.");
        return Some(());
    }

    let query = prompt("Enter appliance name to search: ")?;

    match QueryService::new(registry).search(&query) {
        Ok(matches) => print!("{}", format_search_results(&matches, &query)),
        Err(_) => println!("Search term cannot be empty."),
    }

    Some(())
}

/// Billing flow; `None` means input ended
fn billing_summary(registry: &Registry, paths: &WattagePaths, settings: &Settings) -> Option<()> {
    if registry.is_empty() {
        println!("No appliances registered.");
        return Some(());
    }

    let tariff = prompt_tariff(settings)?;

    // Tariff was validated by the prompt, so generation cannot fail here
    let Ok(report) = BillingReport::generate(registry, tariff) else {
        return Some(());
    };

    print!("{}", report.format_text());

    match report.save_to(paths.billing_file()) {
        Ok(()) => println!(
            "Billing summary saved to {}",
            paths.billing_file().display()
        ),
        Err(e) => eprintln!("Warning: failed to save billing summary: {}", e),
    }

    Some(())
}

/// Prompt for a tariff, offering the configured default when one exists
fn prompt_tariff(settings: &Settings) -> Option<f64> {
    let label = match settings.default_tariff {
        Some(t) => format!("Enter electricity tariff per kWh [{}]: ", t),
        None => "Enter electricity tariff per kWh: ".to_string(),
    };

    loop {
        let input = prompt(&label)?;

        if input.trim().is_empty() {
            if let Some(t) = settings.default_tariff {
                return Some(t);
            }
        } else if let Ok(v) = input.trim().parse::<f64>() {
            if v.is_finite() && v > 0.0 {
                return Some(v);
            }
        }

        println!("Tariff must be a positive number.");
    }
}

/// Prompt until `valid` accepts the parsed number; `None` means input ended
fn prompt_number(label: &str, valid: impl Fn(f64) -> bool, error_msg: &str) -> Option<f64> {
    loop {
        let input = prompt(label)?;

        if let Ok(v) = input.trim().parse::<f64>() {
            if v.is_finite() && valid(v) {
                return Some(v);
            }
        }

        println!("{}", error_msg);
    }
}

/// Print a prompt and read one line; `None` on end of input
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}
