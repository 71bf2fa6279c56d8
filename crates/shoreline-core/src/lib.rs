//! Shoreline Core Library
//!
//! View logic for the Shoreline portfolio landing page, independent of any
//! UI framework.
//!
//! ## Overview
//!
//! One mounted view owns a [`ViewState`]: the light/dark theme, the index of
//! the rotating role title and the season. Four behaviours drive it:
//!
//! - **Theme**: dark when the OS prefers dark or it is night (before 06:00,
//!   after 18:59); re-resolved on every OS preference change; toggled by hand
//! - **Season**: read once from the month at mount, never refreshed
//! - **Roles**: advance every 2 seconds, wrapping after the last title
//! - **Decorations**: snow/leaves, birds and clouds drawn at random on
//!   every render
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use shoreline_core::{DecorationGenerator, SystemClock, ViewHandle, ROTATION_PERIOD};
//!
//! #[tokio::main]
//! async fn main() {
//!     let view = ViewHandle::mount(Arc::new(SystemClock), Some(false), ROTATION_PERIOD);
//!     let snapshot = view.snapshot();
//!
//!     let mut generator = DecorationGenerator::from_entropy();
//!     let layout = generator.generate(snapshot.season, snapshot.theme());
//!     println!("{} falling, {} birds", layout.falling.len(), layout.birds.len());
//!
//!     view.shutdown();
//! }
//! ```

pub mod ambient;
pub mod config;
pub mod decorations;
pub mod error;
pub mod logging;
pub mod roles;
pub mod runtime;
pub mod season;
pub mod state;
pub mod theme;

// Re-exports
pub use ambient::{Clock, FixedClock, LocalMoment, PinnedClock, SharedClock, SystemClock};
pub use config::{ConfigOverrides, ViewConfig};
pub use decorations::{
    Bird, Cloud, CloudAsset, DecorationGenerator, DecorationKind, DecorationSet, FallingElement,
};
pub use error::{Result, ViewError};
pub use roles::{RoleRotator, ROLES, ROTATION_PERIOD};
pub use runtime::{ScopedTask, ViewHandle};
pub use season::Season;
pub use state::{ViewSnapshot, ViewState};
pub use theme::{is_night_time, resolve_theme, Theme};
