//! The closed set of dashboard views.
//!
//! The shell used to track the current view as a bare string; that made
//! `navigate("serach")` a silent no-render. The view selector is now a closed
//! enum: every reachable view is a variant, and string input is converted at
//! the UI boundary via `FromStr`, which fails loudly on unknown names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A body view of the admin console.
///
/// Header and footer are not views: they are always rendered and never
/// navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    Stats,
    Search,
    Transactions,
    Configuration,
}

impl DashboardView {
    /// All views, in navigation order. `ALL[0]` is the initial view.
    pub const ALL: [DashboardView; 4] = [
        DashboardView::Stats,
        DashboardView::Search,
        DashboardView::Transactions,
        DashboardView::Configuration,
    ];

    /// Wire selector, as the navigation events carry it.
    pub fn selector(&self) -> &'static str {
        match self {
            DashboardView::Stats => "stats",
            DashboardView::Search => "search",
            DashboardView::Transactions => "transactions",
            DashboardView::Configuration => "configuration",
        }
    }

    /// Name the view's component is registered under.
    ///
    /// Kept distinct from `selector()` on purpose: the registry namespace also
    /// holds `header-component` / `footer-component`, and the historical
    /// selector names never matched the component names ("stats" vs
    /// "cache-stats").
    pub fn component_name(&self) -> &'static str {
        match self {
            DashboardView::Stats => "cache-stats",
            DashboardView::Search => "cache-search",
            DashboardView::Transactions => "transaction-manager",
            DashboardView::Configuration => "configuration",
        }
    }

    /// Human-readable title for navigation buttons and page headers.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Stats => "Cache Stats",
            DashboardView::Search => "Cache Search",
            DashboardView::Transactions => "Transactions",
            DashboardView::Configuration => "Configuration",
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        DashboardView::Stats
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// A navigation request named a view that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0:?}")]
pub struct UnknownView(pub String);

impl FromStr for DashboardView {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardView::ALL
            .iter()
            .copied()
            .find(|v| v.selector() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_stats() {
        assert_eq!(DashboardView::default(), DashboardView::Stats);
        assert_eq!(DashboardView::default().selector(), "stats");
    }

    #[test]
    fn test_selector_round_trips() {
        for view in DashboardView::ALL {
            assert_eq!(view.selector().parse::<DashboardView>(), Ok(view));
        }
    }

    #[test]
    fn test_unknown_selector_is_an_error() {
        let err = "nonexistent-view".parse::<DashboardView>().unwrap_err();
        assert_eq!(err, UnknownView("nonexistent-view".to_string()));
    }

    #[test]
    fn test_component_name_is_not_the_selector() {
        // The historical naming mismatch: navigating to "search" while the
        // component is registered as "cache-search". The enum keeps both
        // namespaces explicit so the mismatch cannot recur.
        assert_eq!(DashboardView::Search.selector(), "search");
        assert_eq!(DashboardView::Search.component_name(), "cache-search");
        assert!("cache-search".parse::<DashboardView>().is_err());
    }

    #[test]
    fn test_serde_uses_selector_casing() {
        let json = serde_json::to_string(&DashboardView::Transactions).unwrap();
        assert_eq!(json, "\"transactions\"");
        let back: DashboardView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DashboardView::Transactions);
    }
}
