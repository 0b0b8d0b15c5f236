//! Dotted-underline glossary term with a hover tooltip.

use leptos::prelude::*;

use crate::content::definitions;

/// A term underlined in prose; hovering shows its glossary definition.
/// Terms without a glossary entry render as plain text.
#[component]
pub fn TermTooltip(
    /// Glossary key, matched exactly against the definitions table.
    term: &'static str,
    /// Text as it appears in the sentence.
    display: &'static str,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let definition = definitions::define(term);

    view! {
        <span class="term">
            <span
                class="term__anchor"
                class:term__anchor--defined=definition.is_some()
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
            >
                {display}
            </span>
            <Show when=move || hovered.get() && definition.is_some()>
                <span class="term__tooltip">{definition.unwrap_or_default()}</span>
            </Show>
        </span>
    }
}
