//! The Four Cs framework page: rationale panel, card grid, attribution.

use leptos::prelude::*;

use viz::catalog::CategoryId;
use viz::screen::ScreenState;

use crate::components::category_card::CategoryCard;
use crate::components::rationale::Rationale;
use crate::content::frameworks::{
    CITATION, COPYRIGHT, LICENSE_LONG, LICENSE_NAME, LICENSE_NOTE, LICENSE_URL, PAGE_SUBTITLE,
    PAGE_TAGLINE, PAGE_TITLE,
};

#[component]
pub fn FrameworkPage() -> impl IntoView {
    let screen = RwSignal::new(ScreenState::new());
    provide_context(screen);

    view! {
        <div class="framework-page">
            <header class="framework-page__header">
                <h1>{PAGE_TITLE}</h1>
                <p class="framework-page__subtitle">{PAGE_SUBTITLE}</p>
                <p class="framework-page__tagline">{PAGE_TAGLINE}</p>
            </header>

            <Rationale/>

            <div class="framework-page__grid">
                {CategoryId::ALL
                    .into_iter()
                    .map(|cat| view! { <CategoryCard category=cat/> })
                    .collect::<Vec<_>>()}
            </div>

            <footer class="framework-page__footer">
                <p class="framework-page__copyright">
                    "© " {COPYRIGHT} " | "
                    <a href=LICENSE_URL target="_blank" rel="noopener noreferrer">
                        {LICENSE_NAME}
                    </a>
                </p>
                <p class="framework-page__citation-label">"Suggested Citation:"</p>
                <p class="framework-page__citation">{CITATION}</p>
                <p class="framework-page__license">{LICENSE_LONG}</p>
                <p class="framework-page__license">{LICENSE_NOTE}</p>
            </footer>
        </div>
    }
}
