//! Reports module for wattage-cli
//!
//! Billing report generation: a structured value computed once from the
//! registry and a tariff, rendered identically for each output sink.

pub mod billing;

pub use billing::{BillingReport, BillingRow};
