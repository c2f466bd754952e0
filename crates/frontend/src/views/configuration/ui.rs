use super::api;
use contracts::config::ConfigUpdateRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::str::FromStr;

/// Parse one numeric form field; out-of-range input is an error, not a
/// truncation.
fn parse_field<T: FromStr>(name: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("{} must be a non-negative integer, got {:?}", name, raw.trim()))
}

/// A labelled numeric field of the configuration form.
#[component]
fn ConfigField(
    label: &'static str,
    hint: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="config-field">
            <span class="config-field__label">{label}</span>
            <input
                class="input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <span class="config-field__hint">{hint}</span>
        </label>
    }
}

/// Runtime configuration editor.
#[component]
pub fn Configuration() -> impl IntoView {
    let max_memory = RwSignal::new(String::new());
    let default_ttl = RwSignal::new(String::new());
    let frequency_threshold = RwSignal::new(String::new());
    let replication_factor = RwSignal::new(String::new());
    let transaction_timeout = RwSignal::new(String::new());
    let enable_transactions = RwSignal::new(true);

    let saving = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let status_msg = RwSignal::new(None::<String>);

    let fill = move |config: contracts::config::CacheConfigDto| {
        max_memory.set(config.max_memory.to_string());
        default_ttl.set(config.default_ttl.to_string());
        frequency_threshold.set(config.frequency_threshold.to_string());
        replication_factor.set(config.replication_factor.to_string());
        transaction_timeout.set(config.transaction_timeout.to_string());
        enable_transactions.set(config.enable_transactions);
    };

    // Load current configuration on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_config().await {
                Ok(config) => fill(config),
                Err(e) => error_msg.set(Some(e)),
            }
        });
    });

    let save = move |_| {
        error_msg.set(None);
        status_msg.set(None);

        let update = (|| -> Result<ConfigUpdateRequest, String> {
            Ok(ConfigUpdateRequest {
                max_memory: Some(parse_field("max_memory", &max_memory.get_untracked())?),
                default_ttl: Some(parse_field("default_ttl", &default_ttl.get_untracked())?),
                frequency_threshold: Some(parse_field(
                    "frequency_threshold",
                    &frequency_threshold.get_untracked(),
                )?),
                replication_factor: Some(parse_field::<u32>(
                    "replication_factor",
                    &replication_factor.get_untracked(),
                )?),
                enable_transactions: Some(enable_transactions.get_untracked()),
                transaction_timeout: Some(parse_field(
                    "transaction_timeout",
                    &transaction_timeout.get_untracked(),
                )?),
            })
        })();

        let update = match update {
            Ok(update) => update,
            Err(e) => {
                error_msg.set(Some(e));
                return;
            }
        };
        if let Err(reason) = update.validate() {
            error_msg.set(Some(reason));
            return;
        }

        saving.set(true);
        spawn_local(async move {
            match api::update_config(&update).await {
                Ok(applied) => {
                    fill(applied);
                    status_msg.set(Some("Configuration saved".to_string()));
                }
                Err(e) => error_msg.set(Some(e)),
            }
            saving.set(false);
        });
    };

    view! {
        <div id="configuration--system" data-page-category="system" class="page">
            <div class="page__header">
                <h1>"Configuration"</h1>
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
                <div class="config-form">
                    <ConfigField label="Max memory" hint="bytes" value=max_memory />
                    <ConfigField label="Default TTL" hint="seconds" value=default_ttl />
                    <ConfigField
                        label="Frequency threshold"
                        hint="eviction candidates are below this access count"
                        value=frequency_threshold
                    />
                    <ConfigField label="Replication factor" hint="copies per entry" value=replication_factor />
                    <ConfigField label="Transaction timeout" hint="seconds" value=transaction_timeout />

                    <label class="config-field config-field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || enable_transactions.get()
                            on:change=move |ev| enable_transactions.set(event_target_checked(&ev))
                        />
                        <span class="config-field__label">"Enable transactions"</span>
                    </label>

                    <button
                        class="button button--primary"
                        on:click=save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_accepts_padded_integers() {
        assert_eq!(parse_field::<u64>("max_memory", " 1024 "), Ok(1024));
    }

    #[test]
    fn test_parse_field_rejects_garbage() {
        assert!(parse_field::<u64>("max_memory", "ten").is_err());
        assert!(parse_field::<u64>("default_ttl", "-1").is_err());
    }

    #[test]
    fn test_replication_factor_out_of_range_is_an_error() {
        let too_big = (u64::from(u32::MAX) + 1).to_string();
        let result = parse_field::<u32>("replication_factor", &too_big);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("replication_factor"));
    }
}
