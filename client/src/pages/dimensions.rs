//! The entangled-dimensions page: category selectors over a radial field
//! of dimension badges with connector lines from the center.

use leptos::prelude::*;

use viz::catalog::{self, CategoryId, DimensionId};
use viz::screen::ScreenState;

use crate::components::connection_overlay::ConnectionOverlay;
use crate::components::dimension_badge::DimensionBadge;
use crate::util::color::with_alpha;

const DIMENSIONS_URL: &str = "https://rshorst.github.io/Entangled-Dimensions-of-AI-Literacy/";
const FRAMEWORK_URL: &str = "https://rshorst.github.io/computational-sense-making/";

#[component]
pub fn DimensionsPage() -> impl IntoView {
    let screen = RwSignal::new(ScreenState::new());
    provide_context(screen);

    let active = move || screen.get().active_category();

    view! {
        <div class="dimensions-page">
            <header class="dimensions-page__header">
                <h1>"Computational Sense-Making"</h1>
                <h1 class="dimensions-page__subtitle">"and the Entangled Dimensions of AI Literacy"</h1>
                <div class="dimensions-page__intro">
                    <p>
                        "AI literacy is increasingly inseparable from literacy itself—a fundamental capacity for making meaning in a world saturated by computational systems. These "
                        <a href=DIMENSIONS_URL target="_blank" rel="noopener noreferrer">"entangled dimensions"</a>
                        " are not prescriptive categories but provocations for inquiry: ways to interrogate how AI reshapes knowing, making, and relating."
                    </p>
                    <p>
                        "A computational approach to sense-making can work within this ecology, offering lenses for reading AI outputs critically and contextually. Below are some productive connections between the "
                        <a href=FRAMEWORK_URL target="_blank" rel="noopener noreferrer">"Four Cs Framework"</a>
                        " and the broader dimensions of AI literacy."
                    </p>
                </div>
            </header>

            <section class="dimensions-page__selectors">
                <h2>"Explore Connections: Select a C"</h2>
                <div class="dimensions-page__selector-grid">
                    {CategoryId::ALL
                        .into_iter()
                        .map(|cat| category_button(screen, cat))
                        .collect::<Vec<_>>()}
                </div>
            </section>

            {move || {
                active()
                    .map(|cat| {
                        let meta = catalog::category(cat);
                        view! {
                            <section
                                class="dimensions-page__explanation"
                                style=format!(
                                    "border:2px solid {};box-shadow:0 0 20px {};",
                                    meta.color,
                                    with_alpha(meta.color, 0.19),
                                )
                            >
                                <h3 style:color=meta.color>{meta.name} " Connections"</h3>
                                <p>{meta.explanation}</p>
                                <p class="dimensions-page__hint">
                                    "Hover over highlighted dimensions below to see how computational sense-making operates within each."
                                </p>
                            </section>
                        }
                    })
            }}

            <section class="dimension-field">
                <a
                    class="dimension-field__center"
                    href=DIMENSIONS_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <div class="dimension-field__center-line">"entangled"</div>
                    <div class="dimension-field__center-line">"dimensions of"</div>
                    <div class="dimension-field__center-line">"AI LITERACY"</div>
                    <div class="dimension-field__center-hint">"Click to learn more →"</div>
                </a>

                {DimensionId::ALL
                    .into_iter()
                    .map(|dim| view! { <DimensionBadge dim=dim/> })
                    .collect::<Vec<_>>()}

                <ConnectionOverlay/>
            </section>

            <footer class="dimensions-page__footer">
                <p>"Framework: Horst, R. (2025). " <em>"The 4 Cs of Computational Sense-Making"</em></p>
                <p>"Entangled Dimensions: Horst, R. (2025). " <em>"Entangled Dimensions of AI Literacy"</em></p>
                <p class="dimensions-page__license">
                    "Licensed under Creative Commons Attribution 4.0 International"
                </p>
            </footer>
        </div>
    }
}

fn category_button(screen: RwSignal<ScreenState>, cat: CategoryId) -> impl IntoView {
    let meta = catalog::category(cat);
    let selected = move || screen.get().active_category() == Some(cat);

    let style = move || {
        if selected() {
            format!(
                "background-color:{};border:2px solid {};box-shadow:0 0 30px {};",
                meta.color,
                meta.color,
                with_alpha(meta.color, 0.25),
            )
        } else {
            "background-color:rgba(51, 65, 85, 0.6);border:2px solid rgba(148, 163, 184, 0.3);"
                .to_owned()
        }
    };

    view! {
        <button
            class="dimensions-page__selector"
            style=style
            on:click=move |_| screen.update(|s| s.toggle_category(cat))
        >
            <div class="dimensions-page__selector-name">{meta.name}</div>
            <div class="dimensions-page__selector-hint">
                {move || if selected() { "Hide connections" } else { "Show connections" }}
            </div>
        </button>
    }
}
