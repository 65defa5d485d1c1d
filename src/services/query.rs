//! Query operations over the registry
//!
//! Case-insensitive substring search and the per-day energy summary. The
//! full listing needs no computation and is rendered straight from the
//! registry by the display layer.

use crate::error::{WattageError, WattageResult};
use crate::models::{Appliance, Registry};

/// A search result with its computed daily energy
#[derive(Debug, Clone)]
pub struct SearchMatch {
    pub appliance: Appliance,
    pub energy_kwh_per_day: f64,
}

/// One row of the energy summary
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub appliance: Appliance,
    pub energy_kwh_per_day: f64,
}

/// Per-day energy consumption across the whole registry
#[derive(Debug, Clone)]
pub struct EnergySummary {
    pub rows: Vec<SummaryRow>,
    /// Sum of `energy_kwh_per_day` over all appliances
    pub total_kwh_per_day: f64,
}

/// Read-only query service over the registry
pub struct QueryService<'a> {
    registry: &'a Registry,
}

impl<'a> QueryService<'a> {
    /// Create a new query service
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Find appliances whose name contains `query`, case-insensitively
    ///
    /// Matches are returned in registry order. An empty query is rejected
    /// before matching; zero matches is an empty Ok, distinct from the
    /// empty-registry state the caller checks separately.
    pub fn search(&self, query: &str) -> WattageResult<Vec<SearchMatch>> {
        if query.is_empty() {
            return Err(WattageError::Validation(
                "Search term cannot be empty".into(),
            ));
        }

        let query_lower = query.to_lowercase();
        Ok(self
            .registry
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&query_lower))
            .map(|a| SearchMatch {
                appliance: a.clone(),
                energy_kwh_per_day: a.energy_kwh_per_day(),
            })
            .collect())
    }

    /// Compute the per-day energy summary for every appliance
    pub fn energy_summary(&self) -> EnergySummary {
        let rows: Vec<SummaryRow> = self
            .registry
            .iter()
            .map(|a| SummaryRow {
                appliance: a.clone(),
                energy_kwh_per_day: a.energy_kwh_per_day(),
            })
            .collect();

        let total_kwh_per_day = rows.iter().map(|r| r.energy_kwh_per_day).sum();

        EnergySummary {
            rows,
            total_kwh_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.push(Appliance::new("ABC Fan", 50.0, 2.0));
        registry.push(Appliance::new("fan2", 10.0, 1.0));
        registry
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let registry = sample_registry();
        let service = QueryService::new(&registry);

        let matches = service.search("abc").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].appliance.name, "ABC Fan");

        let matches = service.search("FAN").unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_search_results_in_registry_order() {
        let registry = sample_registry();
        let service = QueryService::new(&registry);

        let matches = service.search("fan").unwrap();
        let names: Vec<_> = matches.iter().map(|m| m.appliance.name.as_str()).collect();
        assert_eq!(names, vec!["ABC Fan", "fan2"]);
    }

    #[test]
    fn test_search_rejects_empty_query() {
        let registry = sample_registry();
        let service = QueryService::new(&registry);
        assert!(service.search("").unwrap_err().is_validation());

        // Rejected regardless of registry contents
        let empty = Registry::new();
        let service = QueryService::new(&empty);
        assert!(service.search("").unwrap_err().is_validation());
    }

    #[test]
    fn test_search_zero_matches_is_ok_empty() {
        let registry = sample_registry();
        let service = QueryService::new(&registry);

        let matches = service.search("toaster").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_search_annotates_energy() {
        let registry = sample_registry();
        let service = QueryService::new(&registry);

        let matches = service.search("abc").unwrap();
        assert_eq!(matches[0].energy_kwh_per_day, 50.0 * 2.0 / 1000.0);
    }

    #[test]
    fn test_energy_summary_total() {
        let mut registry = Registry::new();
        registry.push(Appliance::new("Lamp", 60.0, 5.0));
        registry.push(Appliance::new("Heater", 1500.0, 2.0));

        let summary = QueryService::new(&registry).energy_summary();
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.total_kwh_per_day, 0.3 + 3.0);
    }

    #[test]
    fn test_energy_summary_empty_registry() {
        let registry = Registry::new();
        let summary = QueryService::new(&registry).energy_summary();
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_kwh_per_day, 0.0);
    }
}
