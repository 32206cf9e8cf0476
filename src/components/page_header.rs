//! Page title row with breadcrumb and optional actions.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_translator;

#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    /// Right-aligned actions.
    #[props(default)]
    children: Element,
) -> Element {
    let t = use_translator();

    rsx! {
        div { class: "page-header",
            div { class: "page-heading",
                nav { class: "breadcrumb",
                    Link { to: Route::DashboardHome {}, {t.t("nav.home")} }
                    span { class: "breadcrumb-sep", "/" }
                    span { "{title}" }
                }
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
