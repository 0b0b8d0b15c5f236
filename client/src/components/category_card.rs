//! One expandable framework card on the Four Cs page.
//!
//! The header toggles the card through the screen's single-active category
//! selection; the body nests independent disclosure panels (comparisons,
//! "Why it matters", the output walkthrough). Closing or switching cards
//! collapses the nested panels through the disclosure cascade.

#[cfg(test)]
#[path = "category_card_test.rs"]
mod category_card_test;

use leptos::prelude::*;

use viz::catalog::CategoryId;
use viz::disclosure::PanelKey;
use viz::screen::ScreenState;

use crate::components::icons::{card_icon, chevron, info_icon, process_icon};
use crate::components::term_tooltip::TermTooltip;
use crate::content::frameworks::{self, Comparison, Framework, Segment};
use crate::util::text::paragraphs;

/// Section heading for the questions panel. Cards with a worked example
/// walk through it; a card without one would fall back to open inquiry.
fn questions_title(fw: &Framework) -> &'static str {
    if fw.example.prompt.is_empty() { "Questions for Inquiry" } else { "Making Sense of The Output" }
}

/// The constraints card labels its recalibration guidance as a practice
/// rather than an imperative.
fn recalibrate_label(cat: CategoryId) -> &'static str {
    if cat == CategoryId::Constraints { "Recalibration:" } else { "Recalibrate:" }
}

#[component]
pub fn CategoryCard(category: CategoryId) -> impl IntoView {
    let screen = expect_context::<RwSignal<ScreenState>>();
    let fw = frameworks::framework(category);
    let expanded = move || screen.get().active_category() == Some(category);

    view! {
        <div class="c-card" class:c-card--expanded=expanded>
            <header
                class="c-card__header"
                on:click=move |_| screen.update(|s| s.toggle_category(category))
            >
                <div class="c-card__icon">{card_icon(fw.icon)}</div>
                <h3 class="c-card__title" style:color=fw.color>{fw.title.to_uppercase()}</h3>
                <span class="c-card__chevron">{move || chevron(expanded())}</span>
            </header>

            <Show when=expanded>
                <div class="c-card__body" on:click=|ev| ev.stop_propagation()>
                    <p class="c-card__description" style:border-color=fw.color>{fw.description}</p>
                    {key_terms_view(category)}

                    <div class="c-card__comparisons">
                        {fw.comparisons
                            .iter()
                            .enumerate()
                            .map(|(idx, cmp)| comparison_view(screen, category, idx, cmp))
                            .collect::<Vec<_>>()}
                    </div>

                    {why_matters_view(screen, category, fw)}
                    {questions_view(screen, category, fw)}
                </div>
            </Show>
        </div>
    }
}

/// The tooltip-annotated key-terms note, when the card has one.
fn key_terms_view(category: CategoryId) -> Option<impl IntoView> {
    let note = frameworks::key_terms_note(category);
    if note.is_empty() {
        return None;
    }
    Some(view! {
        <p class="c-card__key-terms">
            {note
                .iter()
                .map(|segment| match *segment {
                    Segment::Text(text) => text.into_any(),
                    Segment::Term(term, display) => {
                        view! { <TermTooltip term=term display=display/> }.into_any()
                    }
                })
                .collect::<Vec<_>>()}
        </p>
    })
}

fn comparison_view(
    screen: RwSignal<ScreenState>,
    category: CategoryId,
    idx: usize,
    cmp: &'static Comparison,
) -> impl IntoView {
    let key = PanelKey::Comparison(category, idx);
    let open = move || screen.get().is_open(key);

    view! {
        <div class="comparison">
            <header
                class="comparison__header"
                on:click=move |_| screen.update(|s| s.toggle_panel(key))
            >
                <span class="comparison__icon">{process_icon(cmp.icon)}</span>
                <h5 class="comparison__process">{cmp.process}</h5>
                {move || chevron(open())}
            </header>
            <Show when=open>
                <div class="comparison__reflection">
                    {paragraphs(cmp.reflection)
                        .into_iter()
                        .map(|p| view! { <p>{p}</p> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

fn why_matters_view(
    screen: RwSignal<ScreenState>,
    category: CategoryId,
    fw: &'static Framework,
) -> impl IntoView {
    let key = PanelKey::WhyMatters(category);
    let open = move || screen.get().is_open(key);

    view! {
        <div class="c-card__panel">
            <header
                class="c-card__panel-header"
                on:click=move |_| screen.update(|s| s.toggle_panel(key))
            >
                <h4 style:color=fw.color>
                    <span class="c-card__panel-title">{info_icon()} "Why it matters"</span>
                </h4>
                {move || chevron(open())}
            </header>
            <Show when=open>
                <p class="c-card__panel-body">{fw.why_matters}</p>
            </Show>
        </div>
    }
}

fn questions_view(
    screen: RwSignal<ScreenState>,
    category: CategoryId,
    fw: &'static Framework,
) -> impl IntoView {
    let key = PanelKey::Questions(category);
    let open = move || screen.get().is_open(key);

    view! {
        <div class="c-card__panel">
            <header
                class="c-card__panel-header"
                on:click=move |_| screen.update(|s| s.toggle_panel(key))
            >
                <h4 style:color=fw.color>{questions_title(fw)}</h4>
                {move || chevron(open())}
            </header>
            <Show when=open>
                <div class="c-card__panel-body">
                    {example_view(fw)}

                    <div class="questions__machine">
                        <h5>"Ask the Machine"</h5>
                        <ul>
                            {fw.machine_questions
                                .iter()
                                .map(|q| {
                                    view! {
                                        <li class="machine-question">
                                            <div class="machine-question__name">{q.question}</div>
                                            <div>
                                                <span class="machine-question__label">"Explanation:"</span>
                                                <p>{q.answer}</p>
                                            </div>
                                            <div class="machine-question__recalibrate">
                                                <span class="machine-question__label">
                                                    {recalibrate_label(category)}
                                                </span>
                                                <p>{q.recalibrate}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="questions__human">
                        <h5>"Ask Ourselves"</h5>
                        {paragraphs(fw.questions_for_humans)
                            .into_iter()
                            .map(|p| view! { <p>{p}</p> })
                            .collect::<Vec<_>>()}
                    </div>

                    {fw.takeaway.map(|takeaway| {
                        view! {
                            <div class="questions__takeaway" style:border-color=fw.color>
                                <h5 style:color=fw.color>"Takeaway"</h5>
                                <p>{takeaway}</p>
                            </div>
                        }
                    })}
                </div>
            </Show>
        </div>
    }
}

fn example_view(fw: &'static Framework) -> impl IntoView {
    view! {
        <div class="example">
            <div>
                <span class="example__label">"Prompt:"</span>
                <p class="example__quote">{format!("\"{}\"", fw.example.prompt)}</p>
            </div>
            {fw.example.response.map(|response| {
                view! {
                    <div>
                        <span class="example__label">"AI Response:"</span>
                        <p class="example__quote">{format!("\"{response}\"")}</p>
                    </div>
                }
            })}
            {fw.example.context.map(|context| {
                view! {
                    <div class="example__context">
                        {paragraphs(context)
                            .into_iter()
                            .map(|p| view! { <p>{p}</p> })
                            .collect::<Vec<_>>()}
                        {fw.example.citation.map(|url| {
                            view! {
                                <p class="example__citation">
                                    "Source: "
                                    <a href=url target="_blank" rel="noopener noreferrer">{url}</a>
                                </p>
                            }
                        })}
                    </div>
                }
            })}
        </div>
    }
}
