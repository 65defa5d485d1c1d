//! Billing report
//!
//! Applies a tariff to each appliance's daily energy, aggregates daily
//! totals, and projects them to a fixed 30-day month. Generation is pure;
//! the rendered text is written to stdout and to the billing file by two
//! independent sinks so a file failure never loses the console output.

use std::path::Path;

use crate::error::{WattageError, WattageResult};
use crate::models::Registry;
use crate::storage::write_text_atomic;

/// Days in the billing projection period. A fixed 30-day month is used
/// rather than calendar months.
const DAYS_PER_MONTH: f64 = 30.0;

/// One appliance row of the billing report
#[derive(Debug, Clone)]
pub struct BillingRow {
    /// 1-based position in the registry
    pub index: usize,
    pub name: String,
    pub energy_kwh_per_day: f64,
    pub cost_per_day: f64,
}

/// A generated billing report
#[derive(Debug, Clone)]
pub struct BillingReport {
    /// Tariff (cost per kWh) the report was generated with
    pub tariff: f64,
    pub rows: Vec<BillingRow>,
    pub total_energy_per_day: f64,
    pub total_cost_per_day: f64,
    pub total_energy_per_month: f64,
    pub total_cost_per_month: f64,
}

impl BillingReport {
    /// Generate a billing report for the registry at the given tariff
    ///
    /// The tariff must be a positive number; it is rejected before any row
    /// is computed.
    pub fn generate(registry: &Registry, tariff: f64) -> WattageResult<Self> {
        if !tariff.is_finite() || tariff <= 0.0 {
            return Err(WattageError::Validation(
                "Tariff must be a positive number".into(),
            ));
        }

        let mut total_energy_per_day = 0.0;
        let mut total_cost_per_day = 0.0;

        let rows: Vec<BillingRow> = registry
            .iter()
            .enumerate()
            .map(|(i, appliance)| {
                let energy_kwh_per_day = appliance.energy_kwh_per_day();
                let cost_per_day = energy_kwh_per_day * tariff;

                total_energy_per_day += energy_kwh_per_day;
                total_cost_per_day += cost_per_day;

                BillingRow {
                    index: i + 1,
                    name: appliance.name.clone(),
                    energy_kwh_per_day,
                    cost_per_day,
                }
            })
            .collect();

        Ok(Self {
            tariff,
            rows,
            total_energy_per_day,
            total_cost_per_day,
            total_energy_per_month: total_energy_per_day * DAYS_PER_MONTH,
            total_cost_per_month: total_cost_per_day * DAYS_PER_MONTH,
        })
    }

    /// Format the report for terminal display and for the billing file
    ///
    /// Both sinks receive exactly this text.
    pub fn format_text(&self) -> String {
        let mut output = String::new();

        output.push_str("================ BILLING REPORT ================\n");
        output.push_str(&format!(
            "{:<5}{:<20}{:<12}{:<12}\n",
            "No.", "Name", "kWh/day", "Cost/day"
        ));
        output.push_str("------------------------------------------------\n");

        for row in &self.rows {
            output.push_str(&format!(
                "{:<5}{:<20}{:<12.3}{:<12.2}\n",
                row.index, row.name, row.energy_kwh_per_day, row.cost_per_day
            ));
        }

        output.push_str("------------------------------------------------\n");
        output.push_str(&format!(
            "Total Energy (per day): {:.3} kWh/day\n",
            self.total_energy_per_day
        ));
        output.push_str(&format!(
            "Total Cost (per day):   {:.2}\n",
            self.total_cost_per_day
        ));
        output.push_str(&format!(
            "Monthly Energy (30d):   {:.3} kWh\n",
            self.total_energy_per_month
        ));
        output.push_str(&format!(
            "Monthly Cost (30d):     {:.2}\n",
            self.total_cost_per_month
        ));
        output.push_str("================================================\n");

        output
    }

    /// Write the rendered report to the billing file, overwriting it in full
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> WattageResult<()> {
        write_text_atomic(path, &self.format_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appliance;
    use tempfile::TempDir;

    fn lamp_and_heater() -> Registry {
        let mut registry = Registry::new();
        registry.push(Appliance::new("Lamp", 60.0, 5.0));
        registry.push(Appliance::new("Heater", 1500.0, 2.0));
        registry
    }

    #[test]
    fn test_generate_totals() {
        let registry = lamp_and_heater();
        let report = BillingReport::generate(&registry, 0.2).unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_energy_per_day, 3.3);
        assert_eq!(report.total_cost_per_day, 0.3 * 0.2 + 3.0 * 0.2);
        assert_eq!(report.total_energy_per_month, 3.3 * 30.0);
        assert_eq!(report.total_cost_per_month, (0.3 * 0.2 + 3.0 * 0.2) * 30.0);
    }

    #[test]
    fn test_rows_in_registry_order_one_indexed() {
        let registry = lamp_and_heater();
        let report = BillingReport::generate(&registry, 0.2).unwrap();

        assert_eq!(report.rows[0].index, 1);
        assert_eq!(report.rows[0].name, "Lamp");
        assert_eq!(report.rows[1].index, 2);
        assert_eq!(report.rows[1].name, "Heater");
    }

    #[test]
    fn test_rejects_non_positive_tariff() {
        let registry = lamp_and_heater();

        assert!(BillingReport::generate(&registry, 0.0)
            .unwrap_err()
            .is_validation());
        assert!(BillingReport::generate(&registry, -1.0)
            .unwrap_err()
            .is_validation());
        assert!(BillingReport::generate(&registry, f64::NAN)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_format_text_layout() {
        let registry = lamp_and_heater();
        let report = BillingReport::generate(&registry, 0.2).unwrap();
        let text = report.format_text();

        assert!(text.starts_with("================ BILLING REPORT ================\n"));
        assert!(text.contains("1    Lamp                0.300       0.06"));
        assert!(text.contains("Total Energy (per day): 3.300 kWh/day"));
        assert!(text.contains("Total Cost (per day):   0.66"));
        assert!(text.contains("Monthly Energy (30d):   99.000 kWh"));
        assert!(text.contains("Monthly Cost (30d):     19.80"));
    }

    #[test]
    fn test_save_to_writes_same_text() {
        let registry = lamp_and_heater();
        let report = BillingReport::generate(&registry, 0.2).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("billing_summary.txt");
        report.save_to(&path).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, report.format_text());
    }

    #[test]
    fn test_save_to_unwritable_location_fails_cleanly() {
        let registry = lamp_and_heater();
        let report = BillingReport::generate(&registry, 0.2).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        assert!(report.save_to(blocker.join("billing_summary.txt")).is_err());
    }
}
