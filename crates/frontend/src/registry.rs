//! Explicit view-component registry.
//!
//! The registry used to be ambient framework state populated at script load;
//! it is now a constructed object built once in [`crate::app::App`] and handed
//! to the shell via context. It maps a component name to a factory producing
//! the renderable view; the shell resolves the body component by name on
//! every render.

use leptos::prelude::*;
use std::collections::HashMap;

/// Factory for a renderable unit. Plain `fn` pointer so the registry stays
/// `Copy`-cheap to clone and trivially `Send + Sync`.
pub type ComponentFactory = fn() -> AnyView;

#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<&'static str, ComponentFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under a name. Re-registration overwrites the
    /// previous entry silently; last write wins.
    pub fn register(&mut self, name: &'static str, factory: ComponentFactory) {
        if self.components.insert(name, factory).is_some() {
            log::debug!("component {name:?} re-registered, previous entry replaced");
        }
    }

    /// Look a component up by name at render time.
    pub fn resolve(&self, name: &str) -> Option<ComponentFactory> {
        self.components.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names, sorted for stable diagnostics.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.components.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first() -> AnyView {
        ().into_any()
    }

    fn second() -> AnyView {
        ().into_any()
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ComponentRegistry::new();
        registry.register("cache-stats", first);

        assert!(registry.contains("cache-stats"));
        assert!(registry.resolve("cache-stats").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_name_resolves_to_none() {
        let registry = ComponentRegistry::new();
        assert!(registry.resolve("nonexistent-view").is_none());
        assert!(!registry.contains("nonexistent-view"));
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = ComponentRegistry::new();
        registry.register("configuration", first);
        registry.register("configuration", second);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("configuration"), Some(second as ComponentFactory));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = ComponentRegistry::new();
        registry.register("footer-component", first);
        registry.register("cache-stats", first);
        registry.register("header-component", first);

        assert_eq!(
            registry.names(),
            vec!["cache-stats", "footer-component", "header-component"]
        );
    }
}
