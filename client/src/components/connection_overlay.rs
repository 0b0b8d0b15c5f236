//! SVG overlay drawing dashed connector lines for the active category.

use leptos::prelude::*;

use viz::consts::{LINE_DASH, LINE_OPACITY, LINE_WIDTH};
use viz::screen::ScreenState;

/// Dashed lines from the field's center to every highlighted badge, in the
/// active category's color. Renders nothing while no category is selected.
#[component]
pub fn ConnectionOverlay() -> impl IntoView {
    let screen = expect_context::<RwSignal<ScreenState>>();

    view! {
        <svg class="dimension-field__lines" aria-hidden="true">
            {move || {
                screen
                    .get()
                    .connectors()
                    .into_iter()
                    .map(|line| {
                        view! {
                            <line
                                x1=format!("{}%", line.from.x)
                                y1=format!("{}%", line.from.y)
                                x2=format!("{}%", line.to.x)
                                y2=format!("{}%", line.to.y)
                                stroke=line.color
                                stroke-width=LINE_WIDTH.to_string()
                                stroke-opacity=LINE_OPACITY.to_string()
                                stroke-dasharray=LINE_DASH
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </svg>
    }
}
