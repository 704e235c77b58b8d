//! Numbered list of past submissions.

#[cfg(test)]
#[path = "history_list_test.rs"]
mod history_list_test;

use leptos::prelude::*;

use crate::components::formatted_text::FormattedText;
use crate::net::types::HistoryEntry;
use crate::state::history::HistoryState;
use crate::util::date::format_created_at;

/// Row title; file-only submissions have no prompt text.
fn prompt_label(prompt_text: &str) -> String {
    let prompt = prompt_text.trim();
    if prompt.is_empty() { "Uploaded document".to_owned() } else { prompt.to_owned() }
}

/// Entry list with a loading spinner and an empty-state message.
#[component]
pub fn HistoryList(history: RwSignal<HistoryState>, on_open: Callback<String>) -> impl IntoView {
    let rows = move || {
        history
            .with(|s| s.entries.clone())
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| view! { <HistoryRow index={idx + 1} entry history on_open/> })
            .collect_view()
    };

    view! {
        <Show
            when=move || !history.with(|s| s.loading)
            fallback=|| view! { <div class="spinner" aria-label="Loading history"></div> }
        >
            <Show
                when=move || history.with(|s| !s.entries.is_empty())
                fallback=|| view! { <p class="history-empty">"No summaries yet."</p> }
            >
                <ol class="history-list">{rows}</ol>
            </Show>
        </Show>
    }
}

#[component]
fn HistoryRow(
    index: usize,
    entry: HistoryEntry,
    history: RwSignal<HistoryState>,
    on_open: Callback<String>,
) -> impl IntoView {
    let HistoryEntry { prompt_text, response_id, created_at } = entry;
    let opening_id = response_id.clone();
    let is_opening = move || history.with(|s| s.is_opening(&opening_id));

    view! {
        <li class="history-row">
            <button
                class="history-row__open"
                on:click=move |_| on_open.run(response_id.clone())
            >
                <span class="history-row__index">{index}</span>
                <span class="history-row__prompt">
                    <FormattedText text=prompt_label(&prompt_text)/>
                </span>
                <span class="history-row__date">{format_created_at(&created_at)}</span>
                <Show when=is_opening>
                    <span class="spinner spinner--inline" aria-label="Opening"></span>
                </Show>
            </button>
        </li>
    }
}
