//! Dashboard home: greeting, headline stats, quick actions and recent
//! activity.

use bizcard_core::auth::UserProfile;
use bizcard_core::dashboard::{quick_actions, DashboardStats, RecentActivity};
use bizcard_ui::StatCard;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PageHeader;
use crate::context::{use_session, use_translator};

#[component]
pub fn DashboardHome() -> Element {
    let t = use_translator();
    let session = use_session();
    let stats = use_hook(DashboardStats::sample);
    let activity = use_hook(RecentActivity::sample);

    let first_name = session
        .read()
        .as_ref()
        .map(|s| s.user.first_name.clone())
        .unwrap_or_else(|| UserProfile::default().first_name);

    rsx! {
        PageHeader {
            title: t.t("dashboard.title"),
            subtitle: t.t_with("dashboard.welcome", &[("name", first_name.as_str())]),
            Link {
                class: "btn btn-contained",
                to: Route::CreateCard { template: String::new() },
                "+ "
                {t.t("dashboard.quickActions.createCard")}
            }
        }
        div { class: "stat-grid",
            for tile in stats.tiles.iter() {
                StatCard { key: "{tile.title_key}", title: t.t(tile.title_key), tile: tile.clone() }
            }
        }
        div { class: "dashboard-grid",
            section { class: "card",
                h3 { class: "card-title", {t.t("dashboard.quickActions.title")} }
                div { class: "quick-actions",
                    for action in quick_actions() {
                        Link {
                            key: "{action.href}",
                            class: if action.primary { "quick-action primary" } else { "quick-action" },
                            to: action.href,
                            span { class: "quick-action-icon", "{action.icon}" }
                            span { {t.t(action.title_key)} }
                        }
                    }
                }
            }
            section { class: "card",
                h3 { class: "card-title", {t.t("dashboard.activity.title")} }
                ul { class: "activity-list",
                    for (i, item) in activity.iter().enumerate() {
                        {
                            let (key, n) = item.relative_time();
                            let when = t.t_with(key, &[("count", n.to_string().as_str())]);
                            rsx! {
                                li { key: "{i}", class: "activity-item",
                                    span { class: "activity-icon", "{item.kind.icon()}" }
                                    div { class: "activity-body",
                                        strong { {t.t(item.kind.title_key())} }
                                        span { class: "text-secondary", "{item.subject}" }
                                    }
                                    span { class: "activity-time", "{when}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
