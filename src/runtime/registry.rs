//! Unit factory registry mapping type names to constructors.

use std::collections::HashMap;

use crate::runtime::nodelet::Nodelet;

type UnitFactory = Box<dyn Fn() -> Box<dyn Nodelet> + Send + Sync>;

/// Registry mapping unit type names (`package/Type`) to factories.
pub struct UnitRegistry {
    factories: HashMap<String, UnitFactory>,
}

impl UnitRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the units shipped in this crate.
    pub fn with_defaults() -> Self {
        use crate::units;

        let mut registry = Self::new();

        registry.register(units::bathy_mapper::UNIT_TYPE, || {
            Box::new(units::bathy_mapper::BathyMapperNodelet::default())
        });

        registry
    }

    /// Register a factory for `type_name`, replacing any previous one.
    pub fn register<F>(&mut self, type_name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Nodelet> + Send + Sync + 'static,
    {
        self.factories.insert(type_name.to_owned(), Box::new(factory));
    }

    /// Construct a fresh unit of `type_name`.
    pub fn create(&self, type_name: &str) -> Option<Box<dyn Nodelet>> {
        self.factories.get(type_name).map(|factory| factory())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for UnitRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;
    use crate::runtime::nodelet::UnitContext;

    struct Noop;

    impl Nodelet for Noop {
        fn on_init(&mut self, _ctx: &UnitContext) -> Result<(), UnitError> {
            Ok(())
        }
    }

    #[test]
    fn test_defaults_contain_bathy_mapper() {
        let registry = UnitRegistry::with_defaults();
        assert!(registry.contains("bathy_mapper/BathyMapperNodelet"));
        assert!(registry.create("bathy_mapper/BathyMapperNodelet").is_some());
    }

    #[test]
    fn test_unknown_type() {
        let registry = UnitRegistry::new();
        assert!(registry.create("bathy_mapper/BathyMapperNodelet").is_none());
        assert!(registry.type_names().is_empty());
    }

    #[test]
    fn test_type_names_sorted() {
        let mut registry = UnitRegistry::new();
        registry.register("zeta/Z", || Box::new(Noop));
        registry.register("alpha/A", || Box::new(Noop));
        assert_eq!(registry.type_names(), vec!["alpha/A".to_string(), "zeta/Z".to_string()]);
    }
}
