use super::api;
use crate::shared::icons::icon;
use contracts::search::SearchResultDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Key lookup over the cache contents.
#[component]
pub fn CacheSearch() -> impl IntoView {
    let key = RwSignal::new(String::new());
    let result = RwSignal::new(None::<SearchResultDto>);
    let searching = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let run_search = move || {
        let query = key.get_untracked().trim().to_string();
        if query.is_empty() {
            error_msg.set(Some("Enter a key to search for".to_string()));
            return;
        }

        searching.set(true);
        error_msg.set(None);
        result.set(None);

        spawn_local(async move {
            match api::search_key(&query).await {
                Ok(data) => result.set(Some(data)),
                Err(e) => error_msg.set(Some(e)),
            }
            searching.set(false);
        });
    };

    let result_view = move || {
        result.get().map(|r| {
            if r.found {
                let ttl = r
                    .ttl_remaining_secs
                    .map(|secs| format!("expires in {}s", secs))
                    .unwrap_or_else(|| "no TTL".to_string());
                view! {
                    <div class="search-result search-result--found">
                        <div class="search-result__key">{r.key} " (" {ttl} ")"</div>
                        <pre class="search-result__value">{r.value.unwrap_or_default()}</pre>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="search-result search-result--missing">
                        "Key " <b>{r.key}</b> " is not in the cache"
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <div id="cache-search--list" data-page-category="list" class="page">
            <div class="page__header">
                <h1>"Cache Search"</h1>
            </div>

            <div class="page__content">
                <div class="search-form">
                    <input
                        class="input"
                        type="text"
                        placeholder="Cache key, e.g. session:ab12"
                        prop:value=move || key.get()
                        on:input=move |ev| key.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                run_search();
                            }
                        }
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| run_search()
                        disabled=move || searching.get()
                    >
                        {icon("search")}
                        <span>{move || if searching.get() { "Searching..." } else { "Search" }}</span>
                    </button>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div class="banner banner--error">
                        {move || error_msg.get().unwrap_or_default()}
                    </div>
                </Show>

                {result_view}
            </div>
        </div>
    }
}
