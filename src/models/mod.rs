//! Core data models for wattage-cli
//!
//! This module contains the data structures that represent the tracking
//! domain: appliances and the registry that owns them.

pub mod appliance;
pub mod registry;

pub use appliance::{Appliance, ApplianceValidationError};
pub use registry::Registry;
