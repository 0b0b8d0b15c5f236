//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{dimensions::DimensionsPage, framework::FrameworkPage};

/// Root application component.
///
/// Each page owns its own screen state; nothing is shared across routes, so
/// the only app-level wiring is meta context and the router itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="app" href="/app.css"/>
        <Title text="Computational Sense-Making"/>

        <Router>
            <nav class="site-nav">
                <A href="/">"The Four Cs"</A>
                <A href="/dimensions">"Entangled Dimensions"</A>
            </nav>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FrameworkPage/>
                <Route path=StaticSegment("dimensions") view=DimensionsPage/>
            </Routes>
        </Router>
    }
}
