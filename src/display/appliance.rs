//! Appliance display formatting
//!
//! Formats the registry views as fixed-width terminal tables. Power and
//! hours are shown at 2 decimals, derived energy at 3; the underlying
//! values are never rounded.

use crate::models::Registry;
use crate::services::{EnergySummary, SearchMatch};

/// Format the full 1-indexed appliance listing
pub fn format_appliance_list(registry: &Registry) -> String {
    if registry.is_empty() {
        return "No appliances registered.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("================= APPLIANCES =================\n");
    output.push_str(&format!(
        "{:<5}{:<20}{:<12}{:<12}\n",
        "No.", "Name", "Power(W)", "Hours/day"
    ));
    output.push_str("----------------------------------------------\n");

    for (i, appliance) in registry.iter().enumerate() {
        output.push_str(&format!(
            "{:<5}{:<20}{:<12.2}{:<12.2}\n",
            i + 1,
            appliance.name,
            appliance.power_w,
            appliance.hours_per_day
        ));
    }

    output.push_str("================================================\n");
    output
}

/// Format search results with their computed daily energy
pub fn format_search_results(matches: &[SearchMatch], query: &str) -> String {
    if matches.is_empty() {
        return format!("No appliance matched: {}\n", query);
    }

    let mut output = String::new();
    output.push_str("\nFound:\n");
    output.push_str(&format!(
        "{:<20}{:<12}{:<12}{:<12}\n",
        "Name", "Power(W)", "Hours/day", "kWh/day"
    ));
    output.push_str("------------------------------------------------\n");

    for m in matches {
        output.push_str(&format!(
            "{:<20}{:<12.2}{:<12.2}{:<12.3}\n",
            m.appliance.name, m.appliance.power_w, m.appliance.hours_per_day, m.energy_kwh_per_day
        ));
    }

    output
}

/// Format the per-day energy summary with its total
pub fn format_energy_summary(summary: &EnergySummary) -> String {
    if summary.rows.is_empty() {
        return "No appliances registered.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("=============== ENERGY SUMMARY (per day) ===============\n");
    output.push_str(&format!(
        "{:<20}{:<12}{:<12}{:<12}\n",
        "Name", "Power(W)", "Hours", "kWh/day"
    ));
    output.push_str("--------------------------------------------------------\n");

    for row in &summary.rows {
        output.push_str(&format!(
            "{:<20}{:<12.2}{:<12.2}{:<12.3}\n",
            row.appliance.name,
            row.appliance.power_w,
            row.appliance.hours_per_day,
            row.energy_kwh_per_day
        ));
    }

    output.push_str("--------------------------------------------------------\n");
    output.push_str(&format!(
        "TOTAL ENERGY: {:.3} kWh/day\n",
        summary.total_kwh_per_day
    ));
    output.push_str("========================================================\n");
    output
}
