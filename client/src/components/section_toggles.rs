//! Checkbox row selecting which output sections to request.

use leptos::prelude::*;

use crate::net::types::Section;
use crate::state::submission::SubmissionState;

/// One checkbox per [`Section`], bound to the submission flags.
#[component]
pub fn SectionToggles(submission: RwSignal<SubmissionState>) -> impl IntoView {
    let toggles = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <label class="section-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || submission.with(|s| s.flags.get(section))
                        on:change=move |_| submission.update(|s| s.toggle_section(section))
                    />
                    <span class="section-toggle__label">{section.label()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset class="section-toggles">
            <legend>"Include in summary"</legend>
            {toggles}
        </fieldset>
    }
}
