//! Submission page: pick a document or type a prompt, choose sections, and
//! read the generated summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route and needs no sign-in. Signed-in submissions are
//! additionally recorded to the user's history once the service returns a
//! response id.
//!
//! ERROR HANDLING
//! ==============
//! Submission failures surface in the error banner. History recording is
//! fire-and-forget and only logged.

use leptos::prelude::*;

use crate::app::ServicesHandle;
use crate::components::nav_bar::NavBar;
use crate::components::result_sections::ResultSections;
use crate::components::section_toggles::SectionToggles;
use crate::net::api::ApiConfig;
use crate::state::auth::AuthState;
use crate::state::submission::SubmissionState;
use crate::util::auth::install_session_listener;

/// Document types offered by the file picker.
const ACCEPTED_TYPES: &str = ".pdf,.doc,.docx,.txt";

/// Submission page component.
#[component]
pub fn SubmitPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<ServicesHandle>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let submission = RwSignal::new(SubmissionState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    install_session_listener(&services.get_value().identity, auth);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(pick) = submission.try_update(SubmissionState::begin_file_pick) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match read_upload(file).await {
                    Ok(upload) => {
                        if submission.try_update(|s| s.attach_file(pick, upload)) == Some(false) {
                            leptos::logging::log!("dropped file read superseded by reset or a newer pick");
                        }
                    }
                    Err(e) => leptos::logging::error!("could not read selected file: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |_| {
        let Some(Ok(pending)) = submission.try_update(SubmissionState::begin) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit(&config, &pending.request).await;
                if let Err(e) = &outcome {
                    leptos::logging::warn!("summarize request failed: {e}");
                }
                let identity = auth.with_untracked(|a| a.identity.clone());
                let record = submission
                    .try_update(|s| s.resolve(pending.attempt, outcome, identity.as_ref()))
                    .flatten();
                if let Some(record) = record {
                    leptos::task::spawn_local(async move {
                        if let Err(e) = crate::net::api::record_history(&config, &record).await {
                            leptos::logging::warn!("history record failed: {e}");
                        }
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pending, config);
        }
    };

    let on_reset = move |_| {
        submission.update(SubmissionState::reset);
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        <NavBar/>
        <main class="submit-page">
            <h1 class="submit-page__title">"Summarize a document"</h1>

            <section class="submit-page__inputs">
                <label class="btn upload-button">
                    "Upload File"
                    <input
                        type="file"
                        class="upload-button__input"
                        accept=ACCEPTED_TYPES
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </label>
                <Show when=move || submission.with(|s| s.file.is_some())>
                    <span class="upload-name">
                        {move || submission.with(|s| s.file_name().unwrap_or_default().to_owned())}
                    </span>
                </Show>
                <input
                    class="prompt-input"
                    type="text"
                    placeholder="Enter a one-line prompt or topic"
                    prop:value=move || submission.with(|s| s.prompt_text.clone())
                    on:input=move |ev| submission.update(|s| s.prompt_text = event_target_value(&ev))
                />
            </section>

            <SectionToggles submission/>

            <div class="submit-page__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || !submission.with(SubmissionState::can_submit)
                    on:click=on_submit
                >
                    <Show
                        when=move || submission.with(SubmissionState::is_submitting)
                        fallback=|| "Submit"
                    >
                        <span class="spinner spinner--inline" aria-label="Submitting"></span>
                    </Show>
                </button>
                <button class="btn" on:click=on_reset>"Reset"</button>
            </div>

            {move || {
                submission
                    .with(|s| s.error().map(str::to_owned))
                    .map(|message| view! { <p class="error-banner" role="alert">{message}</p> })
            }}
            {move || submission.with(|s| s.result().cloned()).map(|result| view! { <ResultSections result/> })}
        </main>
    }
}

/// Read the picked file's bytes and metadata.
#[cfg(feature = "hydrate")]
async fn read_upload(file: web_sys::File) -> Result<crate::net::types::Upload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = file.type_();
    Ok(crate::net::types::Upload {
        name: file.name(),
        bytes,
        mime: (!mime.is_empty()).then_some(mime),
    })
}
