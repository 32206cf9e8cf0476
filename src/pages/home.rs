//! Landing page: product pitch, feature grid and a live sample card.

use bizcard_core::api::sample_card;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::CardPreview;
use crate::context::use_translator;

const FEATURES: &[(&str, &str, &str)] = &[
    ("\u{1F3A8}", "home.features.designTitle", "home.features.designDesc"),
    ("\u{25A6}", "home.features.qrTitle", "home.features.qrDesc"),
    ("\u{1F4C8}", "home.features.analyticsTitle", "home.features.analyticsDesc"),
    ("\u{1F310}", "home.features.bilingualTitle", "home.features.bilingualDesc"),
];

#[component]
pub fn Home() -> Element {
    let t = use_translator();
    let demo = use_hook(|| sample_card("demo").draft);

    rsx! {
        main { class: "home",
            section { class: "hero",
                div { class: "hero-copy",
                    h1 { class: "hero-title", {t.t("home.title")} }
                    p { class: "hero-subtitle", {t.t("home.subtitle")} }
                    div { class: "hero-actions",
                        Link { class: "btn btn-contained", to: Route::Register {}, {t.t("home.getStarted")} }
                        Link { class: "btn btn-outlined", to: Route::Login {}, {t.t("home.signIn")} }
                        Link { class: "btn btn-text", to: Route::DashboardHome {}, {t.t("home.openDashboard")} }
                    }
                }
                div { class: "hero-card",
                    CardPreview { draft: demo, scale: 0.9 }
                }
            }
            section { class: "feature-grid",
                for (icon, title, desc) in FEATURES.iter().copied() {
                    div { key: "{title}", class: "feature card",
                        div { class: "feature-icon", "{icon}" }
                        h3 { {t.t(title)} }
                        p { class: "text-secondary", {t.t(desc)} }
                    }
                }
            }
        }
    }
}
