use super::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_bytes, format_count, format_percent};
use crate::shared::icons::icon;
use contracts::stats::{CacheStatsDto, NodeMemoryDto};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const REFRESH_INTERVAL_MS: u32 = 10_000;

/// The poll loop stops once the view is unmounted and its stored state
/// is disposed.
fn keep_polling(mounted: Option<bool>) -> bool {
    mounted.unwrap_or(false)
}

/// Cache statistics, the default view.
#[component]
pub fn CacheStats() -> impl IntoView {
    let stats = RwSignal::new(None::<CacheStatsDto>);
    let nodes = RwSignal::new(Vec::<String>::new());
    let memory = RwSignal::new(Vec::<NodeMemoryDto>::new());
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error_msg.set(None);

        spawn_local(async move {
            match api::get_stats().await {
                Ok(data) => stats.set(Some(data)),
                Err(e) => error_msg.set(Some(e)),
            }
            match api::get_nodes().await {
                Ok(data) => nodes.set(data),
                Err(e) => log::error!("Failed to load nodes: {}", e),
            }
            match api::get_memory_usage().await {
                Ok(data) => memory.set(data),
                Err(e) => log::error!("Failed to load memory usage: {}", e),
            }
            loading.set(false);
        });
    };

    // Load on mount, then keep the counters and tables fresh on a timer
    let mounted = StoredValue::new(true);
    on_cleanup(move || mounted.set_value(false));
    Effect::new(move |_| {
        load();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
                if !keep_polling(mounted.try_get_value()) {
                    break;
                }
                load();
            }
        });
    });

    let hits = Signal::derive(move || stats.get().map(|s| format_count(s.cache_hits)));
    let misses = Signal::derive(move || stats.get().map(|s| format_count(s.cache_misses)));
    let hit_rate = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.hit_rate().map(format_percent).unwrap_or_else(|| "n/a".to_string()))
    });
    let memory_usage = Signal::derive(move || stats.get().map(|s| format_bytes(s.memory_usage)));
    let entry_count = Signal::derive(move || stats.get().map(|s| format_count(s.entry_count)));

    view! {
        <div id="cache-stats--dashboard" data-page-category="dashboard" class="page">
            <div class="page__header">
                <h1>"Cache Stats"</h1>
                <button class="button" on:click=move |_| load() disabled=move || loading.get()>
                    {icon("refresh")}
                    <span>{move || if loading.get() { "Refreshing..." } else { "Refresh" }}</span>
                </button>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div class="banner banner--error">
                    {move || error_msg.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Cache Hits" icon_name="activity" value=hits />
                    <StatCard label="Cache Misses" icon_name="activity" value=misses />
                    <StatCard label="Hit Rate" icon_name="bar-chart" value=hit_rate />
                    <StatCard label="Memory Usage" icon_name="database" value=memory_usage />
                    <StatCard label="Entries" icon_name="database" value=entry_count />
                </div>

                <h2>"Cluster Nodes"</h2>
                <ul class="node-list">
                    {move || {
                        nodes
                            .get()
                            .into_iter()
                            .map(|node| view! { <li class="node-list__item">{node}</li> })
                            .collect_view()
                    }}
                </ul>

                <h2>"Memory by Node"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Node"</th>
                            <th>"Main cache"</th>
                            <th>"Replicas"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            memory
                                .get()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.node}</td>
                                            <td>{format_bytes(row.main_cache)}</td>
                                            <td>{format_bytes(row.replicas)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_loop_stops_once_state_is_disposed() {
        // A live view keeps polling; a disposed StoredValue reads as None
        // and ends the loop.
        assert!(keep_polling(Some(true)));
        assert!(!keep_polling(Some(false)));
        assert!(!keep_polling(None));
    }
}
