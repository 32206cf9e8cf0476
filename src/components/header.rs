//! Dashboard header and the language/mode switches shared with the public
//! layout.

use bizcard_core::auth::UserProfile;
use bizcard_core::{CustomizerAction, Language};
use bizcard_ui::IconButton;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{dispatch, use_customizer, use_customizer_open, use_session, use_translator};

/// Language dropdown. Switching also flips the document direction.
#[component]
pub fn LanguageSwitcher() -> Element {
    let mut customizer = use_customizer();
    let t = use_translator();
    let mut open = use_signal(|| false);
    let current = customizer.read().language;

    rsx! {
        div { class: "dropdown language-switcher",
            button {
                class: "icon-btn",
                r#type: "button",
                title: t.t("header.language"),
                onclick: move |_| open.toggle(),
                "\u{1F310} {current.native_name()}"
            }
            if open() {
                div { class: "dropdown-menu",
                    for lang in Language::all().iter().copied() {
                        button {
                            key: "{lang.code()}",
                            class: if lang == current { "dropdown-item selected" } else { "dropdown-item" },
                            r#type: "button",
                            onclick: move |_| {
                                dispatch(&mut customizer, CustomizerAction::SetLanguage(lang));
                                open.set(false);
                            },
                            "{lang.native_name()}"
                        }
                    }
                }
            }
        }
    }
}

/// Light/dark toggle.
#[component]
pub fn ModeToggle() -> Element {
    let mut customizer = use_customizer();
    let t = use_translator();
    let mode = customizer.read().mode;
    let glyph = match mode {
        bizcard_core::ColorMode::Light => "\u{263E}",
        bizcard_core::ColorMode::Dark => "\u{2600}",
    };

    rsx! {
        IconButton {
            aria_label: t.t("header.toggleMode"),
            onclick: move |_| dispatch(&mut customizer, CustomizerAction::SetMode(mode.toggled())),
            "{glyph}"
        }
    }
}

#[component]
pub fn Header() -> Element {
    let mut customizer = use_customizer();
    let t = use_translator();
    let mut drawer_open = use_customizer_open();
    let mut session = use_session();
    let mut menu_open = use_signal(|| false);
    let navigator = use_navigator();

    let user = session
        .read()
        .as_ref()
        .map(|s| s.user.clone())
        .unwrap_or_else(UserProfile::default);
    let initials: String = [&user.first_name, &user.last_name]
        .iter()
        .filter_map(|n| n.chars().next())
        .collect();

    rsx! {
        header { class: "topbar",
            div { class: "topbar-start",
                IconButton {
                    aria_label: t.t("header.toggleSidebar"),
                    class: "desktop-only".to_string(),
                    onclick: move |_| dispatch(&mut customizer, CustomizerAction::ToggleSidebar),
                    "\u{2630}"
                }
                IconButton {
                    aria_label: t.t("header.toggleSidebar"),
                    class: "mobile-only".to_string(),
                    onclick: move |_| dispatch(&mut customizer, CustomizerAction::ToggleMobileSidebar),
                    "\u{2630}"
                }
            }
            div { class: "topbar-end",
                LanguageSwitcher {}
                ModeToggle {}
                IconButton {
                    aria_label: t.t("customizer.title"),
                    onclick: move |_| drawer_open.set(true),
                    "\u{2699}"
                }
                div { class: "dropdown profile-menu",
                    button {
                        class: "avatar-btn",
                        r#type: "button",
                        onclick: move |_| menu_open.toggle(),
                        span { class: "avatar avatar-sm", "{initials}" }
                    }
                    if menu_open() {
                        div { class: "dropdown-menu",
                            div { class: "dropdown-header",
                                strong { "{user.display_name()}" }
                                span { class: "text-secondary", "{user.email}" }
                            }
                            Link {
                                class: "dropdown-item",
                                to: Route::Profile {},
                                onclick: move |_| menu_open.set(false),
                                {t.t("header.profile")}
                            }
                            Link {
                                class: "dropdown-item",
                                to: Route::Settings {},
                                onclick: move |_| menu_open.set(false),
                                {t.t("header.settings")}
                            }
                            button {
                                class: "dropdown-item danger",
                                r#type: "button",
                                onclick: move |_| {
                                    session.set(None);
                                    menu_open.set(false);
                                    tracing::info!("Signed out");
                                    navigator.push(Route::Login {});
                                },
                                {t.t("header.logout")}
                            }
                        }
                    }
                }
            }
        }
    }
}
