//! Reusable UI components for the landing page.

mod button;
mod decorations;
mod intro_card;
mod role_text;
mod sea_waves;

pub use button::*;
pub use decorations::*;
pub use intro_card::*;
pub use role_text::*;
pub use sea_waves::*;
