//! Registry store
//!
//! Loads and saves the appliance registry to its pipe-delimited text file,
//! one appliance per line in the form `name|power_w|hours_per_day`. Names
//! are not escaped; a `|` or newline in a name would corrupt the record,
//! which is why validation rejects such names before they reach this layer.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::error::WattageResult;
use crate::models::{Appliance, Registry};

use super::file_io::{read_text_optional, write_text_atomic};

/// Persistence for the appliance registry
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the registry from disk
    ///
    /// A missing or unreadable file is the expected first-run state and
    /// yields an empty registry. Malformed or invalid lines are silently
    /// dropped; one bad line never aborts parsing of the rest.
    pub fn load(&self) -> Registry {
        let Some(contents) = read_text_optional(&self.path) else {
            return Registry::new();
        };

        let appliances = contents.lines().filter_map(parse_line).collect();
        Registry::from_appliances(appliances)
    }

    /// Save the full registry to disk, overwriting the previous contents
    ///
    /// Failure leaves the in-memory registry untouched and is non-fatal;
    /// callers report it and continue.
    pub fn save(&self, registry: &Registry) -> WattageResult<()> {
        let mut contents = String::new();
        for appliance in registry {
            // Never fails when writing to a String
            let _ = writeln!(
                contents,
                "{}|{}|{}",
                appliance.name, appliance.power_w, appliance.hours_per_day
            );
        }

        write_text_atomic(&self.path, &contents)
    }
}

/// Parse one registry line, returning `None` for blank or invalid lines
fn parse_line(line: &str) -> Option<Appliance> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split('|');
    let name = fields.next()?;
    let power_w: f64 = fields.next()?.trim().parse().ok()?;
    let hours_per_day: f64 = fields.next()?.trim().parse().ok()?;

    let appliance = Appliance::new(name, power_w, hours_per_day);
    appliance.validate().ok()?;
    Some(appliance)
}
