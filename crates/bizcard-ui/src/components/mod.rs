//! Reusable UI components
//!
//! Every component renders with theme variables only, so the active
//! theme, color mode and text direction apply without extra props.

mod alert;
mod button;
mod controls;
mod input;
mod pills;
mod stat_tile;
mod step_indicator;

pub use alert::*;
pub use button::*;
pub use controls::*;
pub use input::*;
pub use pills::*;
pub use stat_tile::*;
pub use step_indicator::*;
