//! Appliance registry
//!
//! Ordered in-memory collection of all registered appliances. Insertion order
//! is registration order and also display order. Duplicate names are allowed
//! and kept as distinct entries. There is no delete or edit operation.

use super::appliance::Appliance;

/// The ordered in-memory collection of registered appliances
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    appliances: Vec<Appliance>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from an existing sequence, preserving order
    pub fn from_appliances(appliances: Vec<Appliance>) -> Self {
        Self { appliances }
    }

    /// Append an appliance; the caller is responsible for validation
    pub fn push(&mut self, appliance: Appliance) {
        self.appliances.push(appliance);
    }

    /// Iterate over appliances in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, Appliance> {
        self.appliances.iter()
    }

    /// Number of registered appliances
    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    /// Whether the registry has no appliances
    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }

    /// Appliances as a slice, in registration order
    pub fn as_slice(&self) -> &[Appliance] {
        &self.appliances
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Appliance;
    type IntoIter = std::slice::Iter<'a, Appliance>;

    fn into_iter(self) -> Self::IntoIter {
        self.appliances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut registry = Registry::new();
        registry.push(Appliance::new("Fan", 50.0, 2.0));
        registry.push(Appliance::new("Lamp", 60.0, 5.0));

        let names: Vec<_> = registry.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Fan", "Lamp"]);
    }

    #[test]
    fn test_duplicates_are_kept_distinct() {
        let mut registry = Registry::new();
        registry.push(Appliance::new("Fan", 50.0, 2.0));
        registry.push(Appliance::new("Fan", 75.0, 3.0));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.as_slice()[0].power_w, 50.0);
        assert_eq!(registry.as_slice()[1].power_w, 75.0);
    }
}
