//! Public layout: brand bar with language and mode switches, no sidebar.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{LanguageSwitcher, ModeToggle};
use crate::context::use_translator;

#[component]
pub fn PublicLayout() -> Element {
    let t = use_translator();

    rsx! {
        div { class: "public-layout",
            header { class: "public-header",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand-mark", "\u{1FAAA}" }
                    span { class: "brand-name", {t.t("app.name")} }
                }
                div { class: "header-actions",
                    LanguageSwitcher {}
                    ModeToggle {}
                }
            }
            main { class: "public-content",
                Outlet::<Route> {}
            }
            footer { class: "public-footer",
                span { {t.t("app.footer")} }
            }
        }
    }
}
