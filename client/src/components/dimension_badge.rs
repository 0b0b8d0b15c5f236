//! One positioned dimension badge in the entangled-dimensions field.

#[cfg(test)]
#[path = "dimension_badge_test.rs"]
mod dimension_badge_test;

use leptos::prelude::*;

use viz::anchor::PositionAnchor;
use viz::catalog::{self, DimensionId};
use viz::screen::ScreenState;

use crate::components::icons::dimension_icon;
use crate::util::color::with_alpha;

/// Inline CSS placing a badge by its edge offsets. Only the authored axes
/// are emitted; the stylesheet centers any unanchored axis.
fn anchor_style(anchor: &PositionAnchor) -> String {
    let mut style = String::new();
    for (prop, value) in [
        ("top", anchor.top),
        ("bottom", anchor.bottom),
        ("left", anchor.left),
        ("right", anchor.right),
    ] {
        if let Some(pct) = value {
            style.push_str(&format!("{prop}:{pct}%;"));
        }
    }
    style
}

#[component]
pub fn DimensionBadge(dim: DimensionId) -> impl IntoView {
    let screen = expect_context::<RwSignal<ScreenState>>();
    let meta = catalog::dimension(dim);

    let highlighted = move || screen.get().is_highlighted(dim);
    let dimmed = move || screen.get().active_category().is_some() && !highlighted();
    let active_color =
        move || screen.get().active_category().map(|cat| catalog::category(cat).color);

    // Pill colors: the badge takes its own color when highlighted and the
    // active category's color on its border and glow.
    let pill_style = move || {
        if highlighted() {
            let accent = active_color().unwrap_or(meta.color);
            format!(
                "background-color:{};border:3px solid {};box-shadow:0 0 40px {}, 0 0 60px {};",
                meta.color,
                accent,
                with_alpha(meta.color, 0.5),
                with_alpha(accent, 0.38),
            )
        } else {
            format!("border:2px solid {};", with_alpha(meta.color, 0.5))
        }
    };

    let tooltip_border = move || active_color().unwrap_or(meta.color).to_owned();
    let show_tooltip = move || {
        let state = screen.get();
        state.hover.hovered() == Some(dim) && state.tooltip().is_some()
    };

    view! {
        <div
            class="dimension"
            class:dimension--highlighted=highlighted
            class:dimension--dimmed=dimmed
            style=anchor_style(&meta.anchor)
            on:mouseenter=move |_| screen.update(|s| s.pointer_enter(dim))
            on:mouseleave=move |_| screen.update(|s| s.pointer_leave())
        >
            <div class="dimension__pill" style=pill_style>
                {dimension_icon(meta.icon)}
                <span class="dimension__label">{meta.label}</span>
            </div>
            <Show when=show_tooltip>
                <div class="dimension__tooltip" style:border-color=tooltip_border>
                    {move || screen.get().tooltip().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
