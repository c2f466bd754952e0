pub mod footer;
pub mod global_context;
pub mod header;

use crate::registry::ComponentRegistry;
use global_context::AppContext;
use leptos::prelude::*;

/// Page skeleton.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |            Body (one view)               |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
///
/// Header and footer always render; exactly one body view renders, resolved
/// from the registry by the current view's component name.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let registry = use_context::<ComponentRegistry>().expect("ComponentRegistry not found");

    let header = registry.resolve("header-component");
    let footer = registry.resolve("footer-component");
    let body_registry = registry.clone();

    view! {
        <div class="app-layout">
            {header.map(|factory| factory())}
            <main class="app-body">
                {move || {
                    let current = ctx.current_view.get();
                    match body_registry.resolve(current.component_name()) {
                        Some(factory) => factory(),
                        None => {
                            // A name missing from the registry renders an
                            // empty body; observable in the console instead
                            // of silently blank.
                            log::warn!(
                                "no component registered under {:?} for view {current}",
                                current.component_name()
                            );
                            ().into_any()
                        }
                    }
                }}
            </main>
            {footer.map(|factory| factory())}
        </div>
    }
}
