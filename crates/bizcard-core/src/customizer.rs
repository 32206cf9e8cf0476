//! Global presentation preferences ("customizer").
//!
//! Single source of truth for theme, color mode, text direction, language
//! and sidebar layout. Built from the [`KeyValueStore`] at startup; every
//! persisted mutator writes its field back immediately. Write failures are
//! logged and otherwise ignored, so the in-memory state always wins.
//!
//! ## Storage keys
//!
//! | key            | values                         | default      |
//! |----------------|--------------------------------|--------------|
//! | `language`     | `ar`, `en`                     | `ar`         |
//! | `direction`    | `ltr`, `rtl`                   | from language|
//! | `activeMode`   | `light`, `dark`                | `light`      |
//! | `activeTheme`  | `BLUE_THEME`, ...              | `BLUE_THEME` |
//! | `isLayout`     | `boxed`, `full`                | `boxed`      |
//! | `isCollapse`   | `true`, `false`                | `false`      |
//! | `isHorizontal` | `true`, `false`                | `false`      |
//! | `isCardShadow` | `true`, `false`                | `true`       |
//! | `borderRadius` | `4..=24`                       | `7`          |

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::storage::KeyValueStore;

pub use crate::i18n::{Direction, Language};

pub const KEY_LANGUAGE: &str = "language";
pub const KEY_DIRECTION: &str = "direction";
pub const KEY_MODE: &str = "activeMode";
pub const KEY_THEME: &str = "activeTheme";
pub const KEY_LAYOUT: &str = "isLayout";
pub const KEY_COLLAPSE: &str = "isCollapse";
pub const KEY_HORIZONTAL: &str = "isHorizontal";
pub const KEY_CARD_SHADOW: &str = "isCardShadow";
pub const KEY_BORDER_RADIUS: &str = "borderRadius";

/// Every key the customizer persists.
pub const PERSISTED_KEYS: &[&str] = &[
    KEY_LANGUAGE,
    KEY_DIRECTION,
    KEY_MODE,
    KEY_THEME,
    KEY_LAYOUT,
    KEY_COLLAPSE,
    KEY_HORIZONTAL,
    KEY_CARD_SHADOW,
    KEY_BORDER_RADIUS,
];

pub const SIDEBAR_WIDTH: u32 = 270;
pub const MINI_SIDEBAR_WIDTH: u32 = 87;
pub const TOPBAR_HEIGHT: u32 = 70;

pub const MIN_BORDER_RADIUS: u8 = 4;
pub const MAX_BORDER_RADIUS: u8 = 24;
pub const DEFAULT_BORDER_RADIUS: u8 = 7;

/// Light or dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl FromStr for ColorMode {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(CardError::validation("activeMode", format!("unknown mode '{other}'"))),
        }
    }
}

/// Named color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeName {
    #[default]
    #[serde(rename = "BLUE_THEME")]
    Blue,
    #[serde(rename = "AQUA_THEME")]
    Aqua,
    #[serde(rename = "PURPLE_THEME")]
    Purple,
    #[serde(rename = "GREEN_THEME")]
    Green,
    #[serde(rename = "CYAN_THEME")]
    Cyan,
    #[serde(rename = "ORANGE_THEME")]
    Orange,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[
            ThemeName::Blue,
            ThemeName::Aqua,
            ThemeName::Purple,
            ThemeName::Green,
            ThemeName::Cyan,
            ThemeName::Orange,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Blue => "BLUE_THEME",
            ThemeName::Aqua => "AQUA_THEME",
            ThemeName::Purple => "PURPLE_THEME",
            ThemeName::Green => "GREEN_THEME",
            ThemeName::Cyan => "CYAN_THEME",
            ThemeName::Orange => "ORANGE_THEME",
        }
    }

    /// Primary color of the theme, also the default card primary color.
    pub fn primary(&self) -> &'static str {
        match self {
            ThemeName::Blue => "#5D87FF",
            ThemeName::Aqua => "#0074BA",
            ThemeName::Purple => "#763EBD",
            ThemeName::Green => "#0A7EA4",
            ThemeName::Cyan => "#01C0C8",
            ThemeName::Orange => "#FA896B",
        }
    }

    pub fn secondary(&self) -> &'static str {
        match self {
            ThemeName::Blue => "#49BEFF",
            ThemeName::Aqua => "#47D7BC",
            ThemeName::Purple => "#95CFD5",
            ThemeName::Green => "#CCDA4E",
            ThemeName::Cyan => "#FB9678",
            ThemeName::Orange => "#0074BA",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::validation("activeTheme", format!("unknown theme '{s}'")))
    }
}

/// Boxed (centered, max-width) or full-width page container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Boxed,
    Full,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Boxed => "boxed",
            LayoutMode::Full => "full",
        }
    }
}

impl FromStr for LayoutMode {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "boxed" => Ok(LayoutMode::Boxed),
            "full" => Ok(LayoutMode::Full),
            other => Err(CardError::validation("isLayout", format!("unknown layout '{other}'"))),
        }
    }
}

/// Attributes to reflect onto the document root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentRoot {
    pub dir: Direction,
    pub lang: Language,
}

/// Reducer-style actions, one per mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CustomizerAction {
    SetTheme(ThemeName),
    SetMode(ColorMode),
    SetDirection(Direction),
    SetLanguage(Language),
    ToggleSidebar,
    HoverSidebar(bool),
    ToggleMobileSidebar,
    SetLayout(LayoutMode),
    SetHorizontal(bool),
    SetBorderRadius(i64),
    SetCardShadow(bool),
    Initialize,
}

/// The preference store.
#[derive(Clone)]
pub struct Customizer {
    pub direction: Direction,
    pub mode: ColorMode,
    pub theme: ThemeName,
    pub sidebar_width: u32,
    pub mini_sidebar_width: u32,
    pub topbar_height: u32,
    pub is_collapse: bool,
    pub layout: LayoutMode,
    pub is_sidebar_hover: bool,
    pub is_mobile_sidebar: bool,
    pub is_horizontal: bool,
    pub language: Language,
    pub is_card_shadow: bool,
    pub border_radius: u8,
    store: Arc<dyn KeyValueStore>,
}

impl PartialEq for Customizer {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.mode == other.mode
            && self.theme == other.theme
            && self.is_collapse == other.is_collapse
            && self.layout == other.layout
            && self.is_sidebar_hover == other.is_sidebar_hover
            && self.is_mobile_sidebar == other.is_mobile_sidebar
            && self.is_horizontal == other.is_horizontal
            && self.language == other.language
            && self.is_card_shadow == other.is_card_shadow
            && self.border_radius == other.border_radius
    }
}

impl fmt::Debug for Customizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customizer")
            .field("direction", &self.direction)
            .field("mode", &self.mode)
            .field("theme", &self.theme)
            .field("is_collapse", &self.is_collapse)
            .field("layout", &self.layout)
            .field("is_sidebar_hover", &self.is_sidebar_hover)
            .field("is_mobile_sidebar", &self.is_mobile_sidebar)
            .field("is_horizontal", &self.is_horizontal)
            .field("language", &self.language)
            .field("is_card_shadow", &self.is_card_shadow)
            .field("border_radius", &self.border_radius)
            .finish()
    }
}

/// Clamp any requested radius into the slider range.
pub fn clamp_border_radius(value: i64) -> u8 {
    value.clamp(MIN_BORDER_RADIUS as i64, MAX_BORDER_RADIUS as i64) as u8
}

fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(key, "Failed to read preference: {}", e);
            None
        }
    }
}

fn read_parsed<T: FromStr>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    read(store, key).and_then(|v| v.parse().ok())
}

fn stored_language(store: &dyn KeyValueStore) -> Language {
    read_parsed(store, KEY_LANGUAGE).unwrap_or_default()
}

fn stored_direction(store: &dyn KeyValueStore, language: Language) -> Direction {
    read_parsed(store, KEY_DIRECTION).unwrap_or_else(|| language.direction())
}

impl Customizer {
    /// Build the store from persisted values, falling back to defaults for
    /// missing or malformed keys.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let s = store.as_ref();
        let language = stored_language(s);
        let direction = stored_direction(s, language);
        let border_radius = read(s, KEY_BORDER_RADIUS)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(clamp_border_radius)
            .unwrap_or(DEFAULT_BORDER_RADIUS);

        Self {
            direction,
            mode: read_parsed(s, KEY_MODE).unwrap_or_default(),
            theme: read_parsed(s, KEY_THEME).unwrap_or_default(),
            sidebar_width: SIDEBAR_WIDTH,
            mini_sidebar_width: MINI_SIDEBAR_WIDTH,
            topbar_height: TOPBAR_HEIGHT,
            is_collapse: read_parsed(s, KEY_COLLAPSE).unwrap_or(false),
            layout: read_parsed(s, KEY_LAYOUT).unwrap_or_default(),
            is_sidebar_hover: false,
            is_mobile_sidebar: false,
            is_horizontal: read_parsed(s, KEY_HORIZONTAL).unwrap_or(false),
            language,
            is_card_shadow: read_parsed(s, KEY_CARD_SHADOW).unwrap_or(true),
            border_radius,
            store,
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, value, "Failed to persist preference: {}", e);
        }
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
        self.persist(KEY_THEME, theme.as_str());
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.persist(KEY_MODE, mode.as_str());
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.persist(KEY_DIRECTION, direction.as_str());
    }

    /// Switch language; direction follows (Arabic is RTL).
    pub fn set_language(&mut self, language: Language) -> DocumentRoot {
        let direction = language.direction();
        self.language = language;
        self.direction = direction;
        self.persist(KEY_LANGUAGE, language.code());
        self.persist(KEY_DIRECTION, direction.as_str());
        tracing::info!(%language, %direction, "Language changed");
        self.document_root()
    }

    pub fn set_card_shadow(&mut self, enabled: bool) {
        self.is_card_shadow = enabled;
        self.persist(KEY_CARD_SHADOW, bool_str(enabled));
    }

    pub fn toggle_sidebar(&mut self) {
        self.is_collapse = !self.is_collapse;
        self.persist(KEY_COLLAPSE, bool_str(self.is_collapse));
    }

    pub fn set_sidebar_hover(&mut self, hovered: bool) {
        self.is_sidebar_hover = hovered;
    }

    pub fn toggle_mobile_sidebar(&mut self) {
        self.is_mobile_sidebar = !self.is_mobile_sidebar;
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
        self.persist(KEY_LAYOUT, layout.as_str());
    }

    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.is_horizontal = horizontal;
        self.persist(KEY_HORIZONTAL, bool_str(horizontal));
    }

    /// Set the UI corner radius, clamped to `[4, 24]`.
    pub fn set_border_radius(&mut self, radius: i64) -> u8 {
        let clamped = clamp_border_radius(radius);
        self.border_radius = clamped;
        self.persist(KEY_BORDER_RADIUS, &clamped.to_string());
        clamped
    }

    /// Re-read language and direction from storage.
    pub fn initialize(&mut self) -> DocumentRoot {
        let s = self.store.as_ref();
        let language = stored_language(s);
        let direction = stored_direction(s, language);
        self.language = language;
        self.direction = direction;
        self.document_root()
    }

    /// Apply an action. Returns the document root when the action changes
    /// `dir`/`lang`.
    pub fn dispatch(&mut self, action: CustomizerAction) -> Option<DocumentRoot> {
        tracing::debug!(?action, "Customizer dispatch");
        match action {
            CustomizerAction::SetTheme(t) => self.set_theme(t),
            CustomizerAction::SetMode(m) => self.set_mode(m),
            CustomizerAction::SetDirection(d) => {
                self.set_direction(d);
                return Some(self.document_root());
            }
            CustomizerAction::SetLanguage(l) => return Some(self.set_language(l)),
            CustomizerAction::ToggleSidebar => self.toggle_sidebar(),
            CustomizerAction::HoverSidebar(h) => self.set_sidebar_hover(h),
            CustomizerAction::ToggleMobileSidebar => self.toggle_mobile_sidebar(),
            CustomizerAction::SetLayout(l) => self.set_layout(l),
            CustomizerAction::SetHorizontal(h) => self.set_horizontal(h),
            CustomizerAction::SetBorderRadius(r) => {
                self.set_border_radius(r);
            }
            CustomizerAction::SetCardShadow(s) => self.set_card_shadow(s),
            CustomizerAction::Initialize => return Some(self.initialize()),
        }
        None
    }

    pub fn document_root(&self) -> DocumentRoot {
        DocumentRoot {
            dir: self.direction,
            lang: self.language,
        }
    }

    /// Sidebar width in effect: mini when collapsed unless hovered.
    pub fn active_sidebar_width(&self) -> u32 {
        if self.is_collapse && !self.is_sidebar_hover {
            self.mini_sidebar_width
        } else {
            self.sidebar_width
        }
    }

    /// CSS font stack; Cairo first for right-to-left text.
    pub fn font_stack(&self) -> &'static str {
        match self.direction {
            Direction::Rtl => "\"Cairo\", \"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
            Direction::Ltr => "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
        }
    }

    /// Delete every persisted key and return to defaults.
    pub fn reset(&mut self) {
        for key in PERSISTED_KEYS {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, "Failed to clear preference: {}", e);
            }
        }
        *self = Customizer::load(self.store.clone());
    }
}

fn bool_str(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fresh() -> (Arc<MemoryStore>, Customizer) {
        let store = Arc::new(MemoryStore::new());
        let c = Customizer::load(store.clone());
        (store, c)
    }

    #[test]
    fn test_defaults_on_empty_storage() {
        let (_, c) = fresh();
        assert_eq!(c.language, Language::Ar);
        assert_eq!(c.direction, Direction::Rtl);
        assert_eq!(c.theme, ThemeName::Blue);
        assert_eq!(c.mode, ColorMode::Light);
        assert_eq!(c.layout, LayoutMode::Boxed);
        assert!(!c.is_collapse);
        assert!(!c.is_horizontal);
        assert!(c.is_card_shadow);
        assert_eq!(c.border_radius, 7);
        assert_eq!(c.sidebar_width, 270);
        assert_eq!(c.mini_sidebar_width, 87);
    }

    #[test]
    fn test_malformed_keys_fall_back() {
        let store = Arc::new(MemoryStore::with_entries([
            ("activeMode", "sepia"),
            ("isCollapse", "maybe"),
            ("borderRadius", "round"),
            ("activeTheme", "PINK_THEME"),
        ]));
        let c = Customizer::load(store);
        assert_eq!(c.mode, ColorMode::Light);
        assert!(!c.is_collapse);
        assert_eq!(c.border_radius, 7);
        assert_eq!(c.theme, ThemeName::Blue);
    }

    #[test]
    fn test_direction_derived_from_stored_language() {
        let store = Arc::new(MemoryStore::with_entries([("language", "en")]));
        let c = Customizer::load(store);
        assert_eq!(c.direction, Direction::Ltr);

        let store = Arc::new(MemoryStore::with_entries([("language", "en"), ("direction", "rtl")]));
        let c = Customizer::load(store);
        assert_eq!(c.direction, Direction::Rtl);
    }

    #[test]
    fn test_set_language_sets_direction_and_persists() {
        let (store, mut c) = fresh();
        let root = c.set_language(Language::En);
        assert_eq!(root, DocumentRoot { dir: Direction::Ltr, lang: Language::En });
        assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));
        assert_eq!(store.get("direction").unwrap().as_deref(), Some("ltr"));

        c.set_language(Language::Ar);
        assert_eq!(c.direction, Direction::Rtl);
        assert_eq!(store.get("direction").unwrap().as_deref(), Some("rtl"));
    }

    #[test]
    fn test_border_radius_clamped_and_persisted() {
        let (store, mut c) = fresh();
        assert_eq!(c.set_border_radius(100), 24);
        assert_eq!(store.get("borderRadius").unwrap().as_deref(), Some("24"));
        assert_eq!(c.set_border_radius(-3), 4);
        assert_eq!(c.border_radius, 4);
        assert_eq!(c.set_border_radius(12), 12);
    }

    #[test]
    fn test_unpersisted_toggles() {
        let (store, mut c) = fresh();
        c.toggle_mobile_sidebar();
        c.set_sidebar_hover(true);
        assert!(c.is_mobile_sidebar);
        assert!(c.is_sidebar_hover);
        assert!(store.entries().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_sidebar_persists() {
        let (store, mut c) = fresh();
        c.toggle_sidebar();
        assert_eq!(store.get("isCollapse").unwrap().as_deref(), Some("true"));
        assert_eq!(c.active_sidebar_width(), MINI_SIDEBAR_WIDTH);
        c.set_sidebar_hover(true);
        assert_eq!(c.active_sidebar_width(), SIDEBAR_WIDTH);
    }

    #[test]
    fn test_initialize_rereads_storage() {
        let (store, mut c) = fresh();
        store.set("language", "en").unwrap();
        let root = c.dispatch(CustomizerAction::Initialize).unwrap();
        assert_eq!(root.lang, Language::En);
        assert_eq!(root.dir, Direction::Ltr);
        assert_eq!(c.language, Language::En);
    }

    #[test]
    fn test_dispatch_mode_survives_reload() {
        let (store, mut c) = fresh();
        assert!(c.dispatch(CustomizerAction::SetMode(ColorMode::Dark)).is_none());
        let reloaded = Customizer::load(store);
        assert_eq!(reloaded.mode, ColorMode::Dark);
    }

    #[test]
    fn test_reset_clears_storage() {
        let (store, mut c) = fresh();
        c.set_theme(ThemeName::Purple);
        c.set_layout(LayoutMode::Full);
        c.reset();
        assert_eq!(c.theme, ThemeName::Blue);
        assert_eq!(c.layout, LayoutMode::Boxed);
        assert!(store.entries().unwrap().is_empty());
    }

    #[test]
    fn test_font_stack_follows_direction() {
        let (_, mut c) = fresh();
        assert!(c.font_stack().starts_with("\"Cairo\""));
        c.set_direction(Direction::Ltr);
        assert!(c.font_stack().starts_with("\"Roboto\""));
    }
}
