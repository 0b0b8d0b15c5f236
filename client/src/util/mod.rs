//! Utility helpers shared across client UI modules.

pub mod color;
pub mod text;
