//! "Coming soon" placeholders and the not-found page.

use bizcard_ui::EmptyState;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_translator;

/// Dashboard sections that exist in the menu but have no page yet.
pub const PLACEHOLDER_SECTIONS: &[&str] = &[
    "share",
    "public-view",
    "contacts",
    "leads",
    "notifications",
    "help",
    "upgrade",
];

pub fn is_placeholder(section: &str) -> bool {
    PLACEHOLDER_SECTIONS.contains(&section)
}

#[component]
pub fn ComingSoon(section: String) -> Element {
    let t = use_translator();

    if !is_placeholder(&section) {
        tracing::debug!(section = %section, "Unknown dashboard section");
        return rsx! {
            NotFoundContent {}
        };
    }

    rsx! {
        div { class: "card placeholder-page",
            EmptyState {
                icon: "\u{1F6A7}".to_string(),
                title: t.t("comingSoon.title"),
                p { class: "text-secondary", {t.t("comingSoon.description")} }
                Link { class: "btn btn-contained", to: Route::DashboardHome {}, {t.t("common.backToDashboard")} }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "No route matched");
    rsx! {
        main { class: "not-found-page",
            NotFoundContent {}
        }
    }
}

#[component]
fn NotFoundContent() -> Element {
    let t = use_translator();

    rsx! {
        div { class: "card placeholder-page",
            EmptyState {
                icon: "404".to_string(),
                title: t.t("notFound.title"),
                p { class: "text-secondary", {t.t("notFound.description")} }
                Link { class: "btn btn-contained", to: Route::Home {}, {t.t("notFound.goHome")} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcard_core::nav::{sidebar_menu, MenuItem};

    #[test]
    fn test_placeholders_match_soon_menu_entries() {
        for item in sidebar_menu() {
            if let MenuItem::Link { href, chip: Some(_), .. } = item {
                let section = href.trim_start_matches("/dashboard/");
                if !section.contains('/') && section != "analytics" {
                    assert!(is_placeholder(section), "{section} has no page");
                }
            }
        }
    }

    #[test]
    fn test_real_pages_are_not_placeholders() {
        assert!(!is_placeholder("cards"));
        assert!(!is_placeholder("settings"));
        assert!(!is_placeholder("bogus"));
    }
}
