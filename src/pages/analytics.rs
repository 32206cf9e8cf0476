//! Analytics: sample figures for the selected period.

use bizcard_core::dashboard::{format_count, Analytics as AnalyticsData, TimeRange};
use bizcard_ui::{PillGroup, PillOption, StatCard};
use dioxus::prelude::*;

use crate::components::PageHeader;
use crate::context::use_translator;

fn range_from_days(days: &str) -> Option<TimeRange> {
    TimeRange::all()
        .iter()
        .copied()
        .find(|r| r.days().to_string() == days)
}

#[component]
pub fn Analytics() -> Element {
    let t = use_translator();
    let mut range = use_signal(TimeRange::default);
    let data = use_memo(move || AnalyticsData::for_range(range()));

    let options: Vec<PillOption> = TimeRange::all()
        .iter()
        .map(|r| PillOption::new(r.days().to_string(), t.t(r.label_key())))
        .collect();
    let data = data.read().clone();

    rsx! {
        PageHeader { title: t.t("analytics.title"), subtitle: t.t("analytics.subtitle"),
            PillGroup {
                options,
                selected: range().days().to_string(),
                aria_label: t.t("analytics.period"),
                on_select: move |v: String| {
                    if let Some(r) = range_from_days(&v) {
                        range.set(r);
                    }
                },
            }
        }
        div { class: "stat-grid",
            for tile in data.tiles.iter() {
                StatCard { key: "{tile.title_key}", title: t.t(tile.title_key), tile: tile.clone() }
            }
        }
        div { class: "dashboard-grid",
            section { class: "card",
                h3 { class: "card-title", {t.t("analytics.topCards")} }
                table { class: "table",
                    thead {
                        tr {
                            th { {t.t("analytics.cardName")} }
                            th { {t.t("analytics.views")} }
                            th { {t.t("analytics.shares")} }
                            th { {t.t("analytics.engagement")} }
                        }
                    }
                    tbody {
                        for card in data.top_cards.iter() {
                            tr { key: "{card.name}",
                                td { "{card.name}" }
                                td { {format_count(card.views)} }
                                td { {format_count(card.shares)} }
                                td {
                                    div { class: "bar-track",
                                        div { class: "bar-fill", style: "width: {card.engagement}%;" }
                                    }
                                    span { class: "bar-value", "{card.engagement}%" }
                                }
                            }
                        }
                    }
                }
            }
            section { class: "card",
                h3 { class: "card-title", {t.t("analytics.devices")} }
                for share in data.devices.iter() {
                    div { key: "{share.percentage}-{share.color}", class: "bar-row",
                        span { class: "bar-label", {t.t(share.device.label_key())} }
                        div { class: "bar-track",
                            div {
                                class: "bar-fill",
                                style: "width: {share.percentage}%; background: {share.color};",
                            }
                        }
                        span { class: "bar-value", "{share.percentage}%" }
                    }
                }
            }
            section { class: "card",
                h3 { class: "card-title", {t.t("analytics.locations")} }
                for loc in data.locations.iter() {
                    {
                        let pct = data.location_percent(loc.views);
                        rsx! {
                            div { key: "{loc.country_key}", class: "bar-row",
                                span { class: "bar-label", "{loc.flag} ", {t.t(loc.country_key)} }
                                div { class: "bar-track",
                                    div { class: "bar-fill", style: "width: {pct}%;" }
                                }
                                span { class: "bar-value", {format_count(loc.views)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_from_days() {
        assert_eq!(range_from_days("7"), Some(TimeRange::Last7Days));
        assert_eq!(range_from_days("365"), Some(TimeRange::LastYear));
        assert_eq!(range_from_days("12"), None);
    }
}
