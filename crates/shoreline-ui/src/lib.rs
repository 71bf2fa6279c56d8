//! Shoreline UI Components
//!
//! Dioxus components for the portfolio landing page. Styling lives in the
//! host's global stylesheet; components only emit class names and the
//! per-element inline styles computed by `shoreline-core`.
//!
//! ## Layers (back to front)
//!
//! - **Sky**: birds and clouds, re-placed on every render
//! - **Falling**: snowflakes in winter, leaves otherwise
//! - **Sea**: five stacked waves, the nearest the most opaque
//! - **Content**: navigation, rotating role title, intro card

pub mod art;
pub mod components;

pub use components::*;
