//! Service layer for wattage-cli
//!
//! The service layer provides business logic on top of the models,
//! handling validation, registration, and the query operations.

pub mod appliance;
pub mod query;

pub use appliance::ApplianceService;
pub use query::{EnergySummary, QueryService, SearchMatch, SummaryRow};
