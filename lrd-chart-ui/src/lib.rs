//! Shared Dioxus components and D3.js bridge for the launch records dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js pie and scatter charts via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `chart_status`: what each chart container currently shows
//! - `components`: Reusable RSX components (site dropdown, payload slider, containers, etc.)

pub mod chart_status;
pub mod js_bridge;
pub mod state;
pub mod components;
