//! Reusable UI component modules.
//!
//! Components read the per-page `ScreenState` signal from Leptos context and
//! forward clicks and pointer events into it; rendering is a projection of
//! that state plus the static content catalogs.

pub mod category_card;
pub mod connection_overlay;
pub mod dimension_badge;
pub mod icons;
pub mod rationale;
pub mod term_tooltip;
