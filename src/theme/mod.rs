//! Theme: global CSS plus the per-preference CSS variables.

mod colors;
mod styles;

use bizcard_core::{ColorMode, Customizer};

pub use colors::*;
pub use styles::GLOBAL_STYLES;

/// `:root` variables for the active theme, mode, radius and direction.
pub fn theme_variables(c: &Customizer) -> String {
    let surfaces = match c.mode {
        ColorMode::Light => LIGHT,
        ColorMode::Dark => DARK,
    };
    let shadow = if c.is_card_shadow {
        "0 9px 17.5px rgba(0, 0, 0, 0.05)"
    } else {
        "none"
    };
    let card_border = if c.is_card_shadow {
        "none".to_string()
    } else {
        format!("1px solid {}", surfaces.divider)
    };
    let container = match c.layout {
        bizcard_core::LayoutMode::Boxed => "1200px",
        bizcard_core::LayoutMode::Full => "100%",
    };

    format!(
        r#":root {{
  --primary: {primary};
  --secondary: {secondary};
  --success: {success};
  --info: {info};
  --warning: {warning};
  --error: {error};
  --bg: {bg};
  --paper: {paper};
  --text: {text};
  --text-secondary: {text2};
  --divider: {divider};
  --hover: {hover};
  --radius: {radius}px;
  --card-shadow: {shadow};
  --card-border: {card_border};
  --sidebar-width: {sidebar}px;
  --topbar-height: {topbar}px;
  --container-width: {container};
  --font-family: {font};
  color-scheme: {scheme};
}}"#,
        primary = c.theme.primary(),
        secondary = c.theme.secondary(),
        success = SUCCESS,
        info = INFO,
        warning = WARNING,
        error = ERROR,
        bg = surfaces.background,
        paper = surfaces.paper,
        text = surfaces.text_primary,
        text2 = surfaces.text_secondary,
        divider = surfaces.divider,
        hover = surfaces.hover,
        radius = c.border_radius,
        sidebar = c.active_sidebar_width(),
        topbar = c.topbar_height,
        font = c.font_stack(),
        scheme = c.mode.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bizcard_core::{MemoryStore, ThemeName};

    use super::*;

    #[test]
    fn variables_follow_preferences() {
        let mut c = Customizer::load(Arc::new(MemoryStore::new()));
        c.set_theme(ThemeName::Purple);
        c.set_mode(ColorMode::Dark);
        c.set_border_radius(12);
        let css = theme_variables(&c);
        assert!(css.contains("--primary: #763EBD;"));
        assert!(css.contains("--bg: #171C23;"));
        assert!(css.contains("--radius: 12px;"));
        assert!(css.contains("color-scheme: dark;"));
    }

    #[test]
    fn collapsed_sidebar_uses_mini_width() {
        let mut c = Customizer::load(Arc::new(MemoryStore::new()));
        assert!(theme_variables(&c).contains("--sidebar-width: 270px;"));
        c.toggle_sidebar();
        assert!(theme_variables(&c).contains("--sidebar-width: 87px;"));
    }
}
