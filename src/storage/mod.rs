//! Storage layer for wattage-cli
//!
//! Flat-file persistence for the appliance registry, with atomic writes and
//! automatic directory creation.

pub mod file_io;
pub mod registry;

pub use file_io::{read_text_optional, write_text_atomic};
pub use registry::RegistryStore;
