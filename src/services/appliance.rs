//! Appliance registration service
//!
//! Validates appliance candidates and inserts them into the registry.
//! Persistence is the caller's concern: the command loop saves the registry
//! immediately after every successful registration.

use crate::error::{WattageError, WattageResult};
use crate::models::{Appliance, Registry};

/// Service for appliance registration
pub struct ApplianceService<'a> {
    registry: &'a mut Registry,
}

impl<'a> ApplianceService<'a> {
    /// Create a new appliance service
    pub fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Validate and register a new appliance
    ///
    /// On a validation failure nothing is inserted and a specific
    /// `WattageError::Validation` is returned for the caller to report.
    /// Duplicate names are allowed and kept as distinct entries.
    pub fn register(
        &mut self,
        name: &str,
        power_w: f64,
        hours_per_day: f64,
    ) -> WattageResult<Appliance> {
        let appliance = Appliance::new(name, power_w, hours_per_day);

        appliance
            .validate()
            .map_err(|e| WattageError::Validation(e.to_string()))?;

        self.registry.push(appliance.clone());
        Ok(appliance)
    }
}
