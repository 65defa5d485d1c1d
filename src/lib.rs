//! wattage-cli - Terminal-based appliance load tracker and billing estimator
//!
//! This library provides the core functionality for the `wattage` application.
//! It tracks household or office appliances (rated power and daily usage
//! hours), computes their daily energy consumption, and produces electricity
//! billing reports for a given tariff.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (appliances and the registry)
//! - `storage`: Pipe-delimited flat-file storage layer
//! - `services`: Business logic layer (registration, queries)
//! - `reports`: Billing report generation
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers and the interactive menu

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{WattageError, WattageResult};
