use crate::layout::footer::Footer;
use crate::layout::global_context::AppContext;
use crate::layout::header::Header;
use crate::layout::Shell;
use crate::registry::ComponentRegistry;
use crate::views::configuration::Configuration;
use crate::views::search::CacheSearch;
use crate::views::stats::CacheStats;
use crate::views::transactions::TransactionManager;
use leptos::prelude::*;

/// Build the component registry. Runs once, before the shell mounts; the
/// registry is immutable afterwards.
pub fn build_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register("header-component", || view! { <Header /> }.into_any());
    registry.register("footer-component", || view! { <Footer /> }.into_any());
    registry.register("cache-stats", || view! { <CacheStats /> }.into_any());
    registry.register("cache-search", || view! { <CacheSearch /> }.into_any());
    registry.register("transaction-manager", || {
        view! { <TransactionManager /> }.into_any()
    });
    registry.register("configuration", || view! { <Configuration /> }.into_any());
    registry
}

#[component]
pub fn App() -> impl IntoView {
    // Root view controller state, shared with every component via context.
    provide_context(AppContext::new());

    // Registry is populated before the shell renders anything.
    provide_context(build_registry());

    view! {
        <Shell />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::views::DashboardView;

    #[test]
    fn test_registry_holds_all_components() {
        let registry = build_registry();
        for name in [
            "header-component",
            "footer-component",
            "cache-stats",
            "cache-search",
            "transaction-manager",
            "configuration",
        ] {
            assert!(registry.contains(name), "missing component: {name}");
        }
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_every_view_resolves_to_a_component() {
        let registry = build_registry();
        for view in DashboardView::ALL {
            assert!(
                registry.resolve(view.component_name()).is_some(),
                "view {view} has no registered component"
            );
        }
    }

    #[test]
    fn test_selectors_are_not_component_names() {
        // Navigating by raw selector string ("search") must not hit the
        // registry directly; the registry only knows component names.
        let registry = build_registry();
        assert!(registry.resolve("search").is_none());
        assert!(registry.resolve("cache-search").is_some());
    }
}
