use crate::layout::global_context::AppContext;
use crate::shared::icons::icon;
use contracts::views::DashboardView;
use leptos::prelude::*;

fn view_icon(view: DashboardView) -> &'static str {
    match view {
        DashboardView::Stats => "bar-chart",
        DashboardView::Search => "search",
        DashboardView::Transactions => "credit-card",
        DashboardView::Configuration => "settings",
    }
}

/// Persistent page header: title plus one navigation button per view.
/// Clicking a button is the navigation event the shell reacts to.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Cache Admin Console"</span>
                <nav class="header__nav">
                    {DashboardView::ALL
                        .iter()
                        .copied()
                        .map(|target| {
                            let class = move || {
                                if ctx.current_view.get() == target {
                                    "nav-button nav-button--active"
                                } else {
                                    "nav-button"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| ctx.navigate(target)>
                                    {icon(view_icon(target))}
                                    <span>{target.title()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
