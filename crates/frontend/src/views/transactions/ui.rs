use super::api;
use crate::shared::icons::icon;
use contracts::transactions::TransactionDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// In-flight transaction management: list, commit, rollback.
#[component]
pub fn TransactionManager() -> impl IntoView {
    let transactions = RwSignal::new(Vec::<TransactionDto>::new());
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let status_msg = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error_msg.set(None);

        spawn_local(async move {
            match api::list_transactions().await {
                Ok(data) => transactions.set(data),
                Err(e) => error_msg.set(Some(e)),
            }
            loading.set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| load());

    let begin = move |_| {
        status_msg.set(None);
        spawn_local(async move {
            match api::begin_transaction().await {
                Ok(begun) => {
                    status_msg.set(Some(format!("Transaction {} started", begun.id)));
                    load();
                }
                Err(e) => error_msg.set(Some(e)),
            }
        });
    };

    let commit = move |id: Uuid| {
        status_msg.set(None);
        spawn_local(async move {
            match api::commit_transaction(id).await {
                Ok(result) => {
                    status_msg.set(Some(format!(
                        "Committed {} ({} operations applied)",
                        result.id, result.operations
                    )));
                    load();
                }
                Err(e) => error_msg.set(Some(e)),
            }
        });
    };

    let rollback = move |id: Uuid| {
        status_msg.set(None);
        spawn_local(async move {
            match api::rollback_transaction(id).await {
                Ok(result) => {
                    status_msg.set(Some(format!(
                        "Rolled back {} ({} operations reverted)",
                        result.id, result.operations
                    )));
                    load();
                }
                Err(e) => error_msg.set(Some(e)),
            }
        });
    };

    let rows = move || {
        let list = transactions.get();
        if list.is_empty() {
            return view! {
                <tr>
                    <td colspan="5" class="data-table__empty">"No transactions in flight"</td>
                </tr>
            }
            .into_any();
        }

        list.into_iter()
            .map(|t| {
                let id = t.id;
                let short_id = t.id.to_string()[..8].to_string();
                let started = t.started_at.format("%H:%M:%S").to_string();
                view! {
                    <tr>
                        <td title=t.id.to_string()>{short_id}</td>
                        <td>{started}</td>
                        <td>{t.operation_count}</td>
                        <td>{t.expires_in_secs} "s"</td>
                        <td class="data-table__actions">
                            <button class="button button--small" on:click=move |_| commit(id)>
                                "Commit"
                            </button>
                            <button class="button button--small button--danger" on:click=move |_| rollback(id)>
                                "Rollback"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div id="transaction-manager--list" data-page-category="list" class="page">
            <div class="page__header">
                <h1>"Transactions"</h1>
                <div class="page__actions">
                    <button class="button" on:click=begin>"Begin transaction"</button>
                    <button class="button" on:click=move |_| load() disabled=move || loading.get()>
                        {icon("refresh")}
                        <span>"Refresh"</span>
                    </button>
                </div>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div class="banner banner--error">
                    {move || error_msg.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || status_msg.get().is_some()>
                <div class="banner banner--info">
                    {move || status_msg.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="page__content">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Id"</th>
                            <th>"Started"</th>
                            <th>"Operations"</th>
                            <th>"Expires in"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
