//! Dashboard layout: sidebar (or horizontal menu), top header, the routed
//! page and the customizer drawer.

use bizcard_core::CustomizerAction;
use bizcard_ui::class_list;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CustomizerPanel, Header, Sidebar};
use crate::context::{dispatch, use_customizer};

#[component]
pub fn DashboardLayout() -> Element {
    let mut customizer = use_customizer();
    let (collapsed, horizontal, mobile_open) = {
        let c = customizer.read();
        (c.is_collapse && !c.is_sidebar_hover, c.is_horizontal, c.is_mobile_sidebar)
    };

    let class = class_list(
        "dashboard-layout",
        None,
        &[
            (collapsed, "sidebar-collapsed"),
            (horizontal, "layout-horizontal"),
            (mobile_open, "mobile-sidebar-open"),
        ],
    );

    rsx! {
        div { class: "{class}",
            if !horizontal {
                Sidebar { horizontal: false }
            }
            if mobile_open {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| dispatch(&mut customizer, CustomizerAction::ToggleMobileSidebar),
                }
            }
            div { class: "page-wrapper",
                Header {}
                if horizontal {
                    Sidebar { horizontal: true }
                }
                main { class: "page-content",
                    div { class: "container",
                        Outlet::<Route> {}
                    }
                }
            }
            CustomizerPanel {}
        }
    }
}
