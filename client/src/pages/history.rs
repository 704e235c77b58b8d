//! History page: past submissions for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a live persisted uid; otherwise it redirects to `/` on mount.
//! The entry list is fetched once per mount after the identity session
//! reports a user. Selecting an entry swaps the list for that archived
//! result until the user goes back.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged to the console. The list stays on screen
//! (empty if the list fetch itself failed).

use std::rc::Rc;

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::ServicesHandle;
use crate::components::history_list::HistoryList;
use crate::components::nav_bar::NavBar;
use crate::components::result_sections::ResultSections;
use crate::net::api::ApiConfig;
use crate::state::auth::AuthState;
use crate::state::history::{HistoryMode, HistoryState};
use crate::util::auth::{install_history_guard, install_session_listener};

/// History page component.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<ServicesHandle>().get_value();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let history = RwSignal::new(HistoryState::default());
    let navigate = use_navigate();

    install_history_guard(Rc::clone(&services.store), navigate.clone());
    install_session_listener(&services.identity, auth);

    // Load the list once a user is known; leave when the session ends.
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let Some(identity) = state.identity else {
            history.update(HistoryState::abandon_list);
            navigate("/", NavigateOptions::default());
            return;
        };
        if !history.try_update(HistoryState::begin_list_fetch).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_history(&config, &identity.uid).await;
                if let Some(Err(e)) = history.try_update(|s| s.finish_list_fetch(outcome)) {
                    leptos::logging::error!("history list fetch failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, config);
        }
    });

    let on_open = Callback::new(move |response_id: String| {
        history.update(|s| s.begin_open(&response_id));
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_response(&config, &response_id).await;
                if let Some(Err(e)) = history.try_update(|s| s.finish_open(&response_id, outcome)) {
                    leptos::logging::error!("history item {response_id} fetch failed: {e}");
                }
            });
        }
    });

    let body = move || match history.with(|s| s.mode.clone()) {
        HistoryMode::List => Either::Left(view! {
            <h1 class="history-page__title">"Your History"</h1>
            <HistoryList history on_open/>
        }),
        HistoryMode::Detail { result, .. } => Either::Right(view! {
            <button class="btn history-page__back" on:click=move |_| history.update(HistoryState::back)>
                "← Back to History"
            </button>
            <ResultSections result/>
        }),
    };

    view! {
        <NavBar/>
        <main class="history-page">{body}</main>
    }
}
