//! Page modules for route-level screens.
//!
//! Each page owns one `ScreenState` signal, provides it as context for its
//! component subtree, and lays out the route's chrome.

pub mod dimensions;
pub mod framework;
