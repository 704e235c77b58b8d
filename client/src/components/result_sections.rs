//! Structured summary output.
//!
//! Each of the four sections renders only when the result carries it; a
//! response with just notes shows just notes.

#[cfg(test)]
#[path = "result_sections_test.rs"]
mod result_sections_test;

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::formatted_text::FormattedText;
use crate::net::types::{AdditionalInfo, ImportantQuestion, Section, Summary, SummaryResult};

/// `true` for resources that should render as external links.
fn is_link(resource: &str) -> bool {
    let resource = resource.trim();
    resource.starts_with("https://") || resource.starts_with("http://")
}

/// Non-empty additional-info lists with their headings, in display order.
fn further_reading_groups(info: AdditionalInfo) -> Vec<(&'static str, Vec<String>)> {
    [
        ("Related Topics", info.related_topics),
        ("Resources", info.resources),
        ("Further Study", info.further_study),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .collect()
}

/// Render whichever sections `result` contains.
#[component]
pub fn ResultSections(result: SummaryResult) -> impl IntoView {
    let questions = result.questions().map(<[ImportantQuestion]>::to_vec);
    let summary = result.summary_block().cloned();
    let notes = result.note_items().map(<[String]>::to_vec);
    let additional = result.additional_block().cloned();

    view! {
        <div class="results">
            {questions.map(|questions| view! { <QuestionsSection questions/> })}
            {summary.map(|summary| view! { <SummarySection summary/> })}
            {notes.map(|notes| view! { <NotesSection notes/> })}
            {additional.map(|info| view! { <AdditionalInfoSection info/> })}
        </div>
    }
}

#[component]
fn QuestionsSection(questions: Vec<ImportantQuestion>) -> impl IntoView {
    let items = questions
        .into_iter()
        .map(|ImportantQuestion { question, topic, answer }| {
            let topic = (!topic.trim().is_empty()).then_some(topic);
            view! {
                <details class="question">
                    <summary class="question__title">
                        <FormattedText text=question/>
                        {topic.map(|topic| view! { <span class="question__topic">{topic}</span> })}
                    </summary>
                    <div class="question__answer">
                        <FormattedText text=answer/>
                    </div>
                </details>
            }
        })
        .collect_view();

    view! {
        <section class="result-section result-section--questions">
            <h2>{Section::ImportantQuestions.label()}</h2>
            {items}
        </section>
    }
}

#[component]
fn SummarySection(summary: Summary) -> impl IntoView {
    let Summary { main_idea, key_points, conclusion } = summary;
    let main_idea = (!main_idea.trim().is_empty()).then_some(main_idea);
    let conclusion = (!conclusion.trim().is_empty()).then_some(conclusion);
    let key_points = (!key_points.is_empty()).then(|| {
        let items = key_points
            .into_iter()
            .map(|point| view! { <li><FormattedText text=point/></li> })
            .collect_view();
        view! {
            <h3>"Key Points"</h3>
            <ul class="summary__points">{items}</ul>
        }
    });

    view! {
        <section class="result-section result-section--summary">
            <h2>{Section::Summary.label()}</h2>
            {main_idea.map(|text| view! {
                <h3>"Main Idea"</h3>
                <p class="summary__main"><FormattedText text/></p>
            })}
            {key_points}
            {conclusion.map(|text| view! {
                <h3>"Conclusion"</h3>
                <p class="summary__conclusion"><FormattedText text/></p>
            })}
        </section>
    }
}

#[component]
fn NotesSection(notes: Vec<String>) -> impl IntoView {
    let items = notes
        .into_iter()
        .map(|note| view! { <li><FormattedText text=note/></li> })
        .collect_view();

    view! {
        <section class="result-section result-section--notes">
            <h2>{Section::Notes.label()}</h2>
            <ul class="notes">{items}</ul>
        </section>
    }
}

#[component]
fn AdditionalInfoSection(info: AdditionalInfo) -> impl IntoView {
    let groups = further_reading_groups(info)
        .into_iter()
        .map(|(heading, items)| {
            let items = items
                .into_iter()
                .map(|item| {
                    if is_link(&item) {
                        let href = item.trim().to_owned();
                        Either::Left(view! {
                            <li><a href=href target="_blank" rel="noopener noreferrer">{item}</a></li>
                        })
                    } else {
                        Either::Right(view! { <li><FormattedText text=item/></li> })
                    }
                })
                .collect_view();
            view! {
                <h3>{heading}</h3>
                <ul class="additional-info__list">{items}</ul>
            }
        })
        .collect_view();

    view! {
        <section class="result-section result-section--additional">
            <h2>{Section::AdditionalInfo.label()}</h2>
            {groups}
        </section>
    }
}
