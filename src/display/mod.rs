//! Display formatting for terminal output
//!
//! Formats the registry views (listing, search results, energy summary)
//! for terminal display.

pub mod appliance;

pub use appliance::{format_appliance_list, format_energy_summary, format_search_results};
