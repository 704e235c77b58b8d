//! Inline rendering of `**emphasis**` text with preserved line breaks.

use leptos::either::Either;
use leptos::prelude::*;

use crate::util::emphasis;

/// Render `text` with `**...**` runs as `<strong>` and newlines as `<br/>`.
#[component]
pub fn FormattedText(#[prop(into)] text: String) -> impl IntoView {
    let lines = emphasis::parse(&text);
    let last = lines.len().saturating_sub(1);

    let rendered = lines
        .into_iter()
        .enumerate()
        .map(|(idx, spans)| {
            let spans = spans
                .into_iter()
                .map(|span| {
                    if span.strong {
                        Either::Left(view! { <strong>{span.text}</strong> })
                    } else {
                        Either::Right(span.text)
                    }
                })
                .collect_view();
            view! {
                {spans}
                {(idx < last).then(|| view! { <br/> })}
            }
        })
        .collect_view();

    view! { <span class="formatted-text">{rendered}</span> }
}
