//! Sidebar menu definition.

/// Icon of a sidebar entry. The UI maps each to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Analytics,
    Cards,
    Plus,
    Palette,
    Qr,
    Share,
    Eye,
    Users,
    Chart,
    User,
    Crown,
    Bell,
    Settings,
    Help,
    World,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "▣",
            NavIcon::Analytics => "📈",
            NavIcon::Cards => "🪪",
            NavIcon::Plus => "+",
            NavIcon::Palette => "🎨",
            NavIcon::Qr => "▦",
            NavIcon::Share => "↗",
            NavIcon::Eye => "👁",
            NavIcon::Users => "👥",
            NavIcon::Chart => "📊",
            NavIcon::User => "👤",
            NavIcon::Crown => "♛",
            NavIcon::Bell => "🔔",
            NavIcon::Settings => "⚙",
            NavIcon::Help => "?",
            NavIcon::World => "🌐",
        }
    }
}

/// Badge on a menu link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    New,
    Create,
    Soon,
    Upgrade,
}

impl Chip {
    pub fn label_key(&self) -> &'static str {
        match self {
            Chip::New => "sidebar.chips.new",
            Chip::Create => "sidebar.chips.create",
            Chip::Soon => "sidebar.chips.soon",
            Chip::Upgrade => "sidebar.chips.upgrade",
        }
    }

    /// CSS color variable of the badge.
    pub fn color_var(&self) -> &'static str {
        match self {
            Chip::New => "var(--primary)",
            Chip::Create => "var(--success)",
            Chip::Soon => "var(--info)",
            Chip::Upgrade => "var(--secondary)",
        }
    }

    pub fn outlined(&self) -> bool {
        matches!(self, Chip::Soon | Chip::Upgrade)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Section {
        title_key: &'static str,
    },
    Link {
        title_key: &'static str,
        icon: NavIcon,
        href: &'static str,
        chip: Option<Chip>,
    },
}

impl MenuItem {
    const fn section(title_key: &'static str) -> Self {
        MenuItem::Section { title_key }
    }

    const fn link(title_key: &'static str, icon: NavIcon, href: &'static str, chip: Option<Chip>) -> Self {
        MenuItem::Link {
            title_key,
            icon,
            href,
            chip,
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            MenuItem::Section { title_key } | MenuItem::Link { title_key, .. } => title_key,
        }
    }

    pub fn href(&self) -> Option<&'static str> {
        match self {
            MenuItem::Link { href, .. } => Some(href),
            MenuItem::Section { .. } => None,
        }
    }
}

const MENU: &[MenuItem] = &[
    MenuItem::section("sidebar.sections.dashboard"),
    MenuItem::link("sidebar.dashboard.home", NavIcon::Dashboard, "/dashboard/home", None),
    MenuItem::link(
        "sidebar.dashboard.analytics",
        NavIcon::Analytics,
        "/dashboard/analytics",
        Some(Chip::New),
    ),
    MenuItem::section("sidebar.sections.cards"),
    MenuItem::link("sidebar.cards.myCards", NavIcon::Cards, "/dashboard/cards", None),
    MenuItem::link(
        "sidebar.cards.createNew",
        NavIcon::Plus,
        "/dashboard/cards/create",
        Some(Chip::Create),
    ),
    MenuItem::link(
        "sidebar.cards.templates",
        NavIcon::Palette,
        "/dashboard/cards/templates",
        None,
    ),
    MenuItem::section("sidebar.sections.sharing"),
    MenuItem::link("sidebar.qr.generator", NavIcon::Qr, "/dashboard/qr", None),
    MenuItem::link("sidebar.sharing.share", NavIcon::Share, "/dashboard/share", Some(Chip::Soon)),
    MenuItem::link(
        "sidebar.sharing.publicView",
        NavIcon::Eye,
        "/dashboard/public-view",
        Some(Chip::Soon),
    ),
    MenuItem::section("sidebar.sections.networking"),
    MenuItem::link(
        "sidebar.contacts.contacts",
        NavIcon::Users,
        "/dashboard/contacts",
        Some(Chip::Soon),
    ),
    MenuItem::link("sidebar.contacts.leads", NavIcon::Chart, "/dashboard/leads", Some(Chip::Soon)),
    MenuItem::section("sidebar.sections.account"),
    MenuItem::link("sidebar.account.profile", NavIcon::User, "/dashboard/profile", None),
    MenuItem::link(
        "sidebar.account.subscription",
        NavIcon::Crown,
        "/dashboard/upgrade",
        Some(Chip::Upgrade),
    ),
    MenuItem::link(
        "sidebar.account.notifications",
        NavIcon::Bell,
        "/dashboard/notifications",
        Some(Chip::Soon),
    ),
    MenuItem::link("sidebar.account.settings", NavIcon::Settings, "/dashboard/settings", None),
    MenuItem::section("sidebar.sections.support"),
    MenuItem::link("sidebar.support.help", NavIcon::Help, "/dashboard/help", Some(Chip::Soon)),
];

/// The fixed sidebar menu, in display order.
pub fn sidebar_menu() -> &'static [MenuItem] {
    MENU
}

/// Whether a link is the current page. `/dashboard/cards` stays active on
/// its sub-pages, but `/dashboard/cards/create` does not light up for
/// `/dashboard/cards`.
pub fn is_active(href: &str, current_path: &str) -> bool {
    let path = current_path.split(['?', '#']).next().unwrap_or("").trim_end_matches('/');
    let href = href.trim_end_matches('/');
    if path == href {
        return true;
    }
    let Some(rest) = path.strip_prefix(href) else {
        return false;
    };
    // Sub-pages count, unless another menu entry claims the path.
    rest.starts_with('/')
        && !MENU
            .iter()
            .filter_map(MenuItem::href)
            .any(|other| other != href && other.len() > href.len() && path.starts_with(other))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_with_section() {
        let menu = sidebar_menu();
        assert!(matches!(menu[0], MenuItem::Section { .. }));
        assert_eq!(menu[1].href(), Some("/dashboard/home"));
    }

    #[test]
    fn test_menu_hrefs_unique() {
        let mut hrefs: Vec<_> = sidebar_menu().iter().filter_map(MenuItem::href).collect();
        let total = hrefs.len();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), total);
    }

    #[test]
    fn test_is_active_exact_and_nested() {
        assert!(is_active("/dashboard/home", "/dashboard/home"));
        assert!(is_active("/dashboard/home", "/dashboard/home/"));
        assert!(is_active("/dashboard/cards", "/dashboard/cards/edit/3"));
        assert!(!is_active("/dashboard/cards", "/dashboard/cards/create"));
        assert!(is_active("/dashboard/cards/create", "/dashboard/cards/create"));
        assert!(!is_active("/dashboard/qr", "/dashboard/qrx"));
        assert!(is_active("/dashboard/qr", "/dashboard/qr?x=1"));
    }

    #[test]
    fn test_soon_chips_are_outlined() {
        assert!(Chip::Soon.outlined());
        assert!(!Chip::New.outlined());
    }
}
