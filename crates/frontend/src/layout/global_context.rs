use contracts::views::DashboardView;
use leptos::prelude::*;

/// Root view controller state: the single selector deciding which body view
/// is rendered. Provided app-wide via Leptos context.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub current_view: RwSignal<DashboardView>,
}

impl AppContext {
    /// The console opens on the stats view.
    pub fn new() -> Self {
        Self {
            current_view: RwSignal::new(DashboardView::Stats),
        }
    }

    /// Overwrite the current view. Never fails; navigating to the view that
    /// is already shown is a no-op for subscribers with the same value.
    ///
    /// Subscribers observe the new value only after the write is fully
    /// applied; the reactive graph runs them afterwards, never mid-mutation.
    pub fn navigate(&self, view: DashboardView) {
        log::debug!("navigate: {view}");
        self.current_view.set(view);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
