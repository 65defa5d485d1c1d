//! Appliance model
//!
//! Represents one tracked electrical device with its rated power and daily
//! usage hours, plus the derived energy computation.

use std::fmt;

/// A tracked electrical appliance
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    /// Appliance name (e.g., "Ceiling Fan")
    pub name: String,

    /// Rated power in watts, strictly positive
    pub power_w: f64,

    /// Daily usage in hours, within [0, 24]
    pub hours_per_day: f64,
}

impl Appliance {
    /// Create a new appliance
    pub fn new(name: impl Into<String>, power_w: f64, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            power_w,
            hours_per_day,
        }
    }

    /// Daily energy consumption in kWh
    ///
    /// No rounding is applied here; rounding is a display concern.
    pub fn energy_kwh_per_day(&self) -> f64 {
        self.power_w * self.hours_per_day / 1000.0
    }

    /// Validate the appliance
    pub fn validate(&self) -> Result<(), ApplianceValidationError> {
        if self.name.is_empty() {
            return Err(ApplianceValidationError::EmptyName);
        }

        // The registry file uses '|' as field separator with no escaping,
        // so these characters would corrupt the persisted record.
        if self.name.contains('|') || self.name.contains('\n') {
            return Err(ApplianceValidationError::NameContainsDelimiter);
        }

        if !(self.power_w > 0.0) {
            return Err(ApplianceValidationError::NonPositivePower(self.power_w));
        }

        if !(0.0..=24.0).contains(&self.hours_per_day) {
            return Err(ApplianceValidationError::HoursOutOfRange(
                self.hours_per_day,
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} W, {} h/day)",
            self.name, self.power_w, self.hours_per_day
        )
    }
}

/// Validation errors for appliances
#[derive(Debug, Clone, PartialEq)]
pub enum ApplianceValidationError {
    EmptyName,
    NameContainsDelimiter,
    NonPositivePower(f64),
    HoursOutOfRange(f64),
}

impl fmt::Display for ApplianceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Appliance name must not be empty"),
            Self::NameContainsDelimiter => {
                write!(f, "Appliance name must not contain '|' or newlines")
            }
            Self::NonPositivePower(p) => {
                write!(f, "Power must be greater than zero (got {})", p)
            }
            Self::HoursOutOfRange(h) => {
                write!(f, "Hours must be between 0 and 24 (got {})", h)
            }
        }
    }
}

impl std::error::Error for ApplianceValidationError {}
