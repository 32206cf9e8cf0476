//! Palette constants shared by every theme.
//!
//! Theme-specific primary and secondary colors live on `ThemeName`; this
//! file holds the semantic colors and the light/dark surfaces.

// === SEMANTIC ===
pub const SUCCESS: &str = "#13DEB9";
pub const INFO: &str = "#539BFF";
pub const WARNING: &str = "#FFAE1F";
pub const ERROR: &str = "#FA896B";

/// Surface colors for one color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surfaces {
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
    pub hover: &'static str,
}

pub const LIGHT: Surfaces = Surfaces {
    background: "#F5F7FA",
    paper: "#FFFFFF",
    text_primary: "#2A3547",
    text_secondary: "#5A6A85",
    divider: "#E5EAEF",
    hover: "#F6F9FC",
};

pub const DARK: Surfaces = Surfaces {
    background: "#171C23",
    paper: "#2A3447",
    text_primary: "#EAEFF4",
    text_secondary: "#7C8FAC",
    divider: "#333F55",
    hover: "#333F55",
};
