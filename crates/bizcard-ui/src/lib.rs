//! BizCard UI Components
//!
//! Dioxus building blocks shared by the desktop pages: buttons, form
//! fields, sliders and switches, alerts, the wizard step indicator and
//! dashboard tiles.
//!
//! ## Styling
//!
//! Components only emit class names and CSS variables. The palette comes
//! from the active theme (`--primary`, `--secondary`, `--radius`, ...),
//! which the desktop shell writes onto the document root, so every
//! component follows theme, color mode and direction changes without
//! re-rendering props.

pub mod components;

pub use components::*;
