//! Configuration for wattage-cli
//!
//! Path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::WattagePaths;
pub use settings::Settings;
