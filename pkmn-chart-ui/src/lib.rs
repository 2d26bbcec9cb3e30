//! Shared Dioxus components and D3.js bridge for the battle stats dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand chart specs to the D3.js renderers
//!   and route selection notifications back into Rust
//! - `state`: AppState with Dioxus Signals (dataset + current selection)
//! - `components`: Reusable RSX components (containers, headers, summary)

pub mod components;
pub mod js_bridge;
pub mod state;
