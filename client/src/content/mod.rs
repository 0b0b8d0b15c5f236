//! Static editorial content for the framework page.
//!
//! Everything here is compile-time data: the four framework cards, the
//! rationale and misapprehension copy, and the glossary of key terms that
//! backs inline tooltips. The `viz` catalog owns the dimensions-page
//! content; this module owns the long-form prose.

pub mod definitions;
pub mod frameworks;
