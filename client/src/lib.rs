//! # client
//!
//! Leptos + WASM frontend for the computational sense-making explorer.
//!
//! Two routes: the Four Cs framework page (expandable category cards with
//! nested disclosure panels) and the entangled-dimensions page (a radial
//! field of dimension badges wired to the active category by connector
//! lines). All interaction state lives in the `viz` engine; this crate is
//! the rendering layer over it.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod util;

pub use app::App;
