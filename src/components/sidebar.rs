//! Sidebar Component
//!
//! Vertical menu with section headers and chips. The same menu renders as
//! a top bar when the horizontal layout is active.

use bizcard_core::nav::{is_active, sidebar_menu, MenuItem};
use bizcard_core::CustomizerAction;
use bizcard_ui::{chip_style, Badge};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{dispatch, use_customizer, use_translator};

#[component]
pub fn Sidebar(horizontal: bool) -> Element {
    let t = use_translator();
    let mut customizer = use_customizer();
    let current_path = use_route::<Route>().to_string();
    let collapsed = {
        let c = customizer.read();
        c.is_collapse && !c.is_sidebar_hover && !horizontal
    };

    let class = if horizontal { "sidebar horizontal" } else { "sidebar" };

    rsx! {
        aside {
            class: "{class}",
            onmouseenter: move |_| {
                if customizer.peek().is_collapse {
                    dispatch(&mut customizer, CustomizerAction::HoverSidebar(true));
                }
            },
            onmouseleave: move |_| {
                if customizer.peek().is_sidebar_hover {
                    dispatch(&mut customizer, CustomizerAction::HoverSidebar(false));
                }
            },
            if !horizontal {
                div { class: "sidebar-brand",
                    Link { class: "brand", to: Route::DashboardHome {},
                        span { class: "brand-mark", "\u{1FAAA}" }
                        if !collapsed {
                            span { class: "brand-name", {t.t("app.name")} }
                        }
                    }
                }
            }
            nav { class: "sidebar-nav",
                ul {
                    for (i, item) in sidebar_menu().iter().enumerate() {
                        {
                            match item {
                                MenuItem::Section { title_key } => {
                                    let label = if collapsed { "\u{22EF}".to_string() } else { t.t(title_key) };
                                    rsx! {
                                        if !horizontal {
                                            li { key: "{i}", class: "nav-section", "{label}" }
                                        }
                                    }
                                }
                                MenuItem::Link { title_key, icon, href, chip } => {
                                    let link_class = if is_active(href, &current_path) {
                                        "nav-link active"
                                    } else {
                                        "nav-link"
                                    };
                                    let title = t.t(title_key);
                                    let chip = chip.map(|c| (t.t(c.label_key()), chip_style(c)));
                                    rsx! {
                                        li { key: "{i}",
                                            Link {
                                                class: "{link_class}",
                                                to: *href,
                                                onclick: move |_| {
                                                    if customizer.peek().is_mobile_sidebar {
                                                        dispatch(&mut customizer, CustomizerAction::ToggleMobileSidebar);
                                                    }
                                                },
                                                span { class: "nav-icon", "{icon.glyph()}" }
                                                if !collapsed {
                                                    span { class: "nav-title", "{title}" }
                                                    if let Some((label, style)) = chip {
                                                        Badge { label, style }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
