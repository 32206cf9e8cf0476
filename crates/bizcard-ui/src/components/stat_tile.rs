//! Dashboard Tiles, Badges and Loading States

use bizcard_core::dashboard::StatTile;
use bizcard_core::nav::Chip;
use dioxus::prelude::*;

/// Headline figure with its period-over-period change
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for tile in DashboardStats::sample().tiles {
///         StatCard { title: t.t(tile.title_key), tile: tile.clone() }
///     }
/// }
/// ```
#[component]
pub fn StatCard(title: String, tile: StatTile) -> Element {
    let trend_class = if tile.is_increase() {
        "stat-change up"
    } else {
        "stat-change down"
    };
    let arrow = if tile.is_increase() { "\u{2191}" } else { "\u{2193}" };

    rsx! {
        div { class: "card stat-card",
            div {
                class: "stat-icon",
                style: "color: {tile.color}; background: color-mix(in srgb, {tile.color} 15%, transparent)",
                "{tile.icon}"
            }
            div { class: "stat-body",
                span { class: "stat-title", "{title}" }
                span { class: "stat-value", "{tile.formatted_value()}" }
                span { class: "{trend_class}", "{arrow} {tile.formatted_change()}" }
            }
        }
    }
}

/// Inline style for a menu badge.
pub fn chip_style(chip: Chip) -> String {
    let color = chip.color_var();
    if chip.outlined() {
        format!("border: 1px solid {color}; color: {color}")
    } else {
        format!("background: {color}; color: #fff")
    }
}

/// Small rounded label
#[component]
pub fn Badge(label: String, #[props(default)] style: String) -> Element {
    rsx! {
        span { class: "badge", style: "{style}", "{label}" }
    }
}

/// Circular spinner
#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div { class: "spinner-wrapper", role: "status",
            span { class: "spinner" }
            if let Some(label) = label {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}

/// Placeholder for an empty list
#[component]
pub fn EmptyState(icon: String, title: String, #[props(default)] children: Element) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon", "{icon}" }
            h3 { class: "empty-title", "{title}" }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_style_outlined_vs_filled() {
        assert_eq!(
            chip_style(Chip::Soon),
            "border: 1px solid var(--info); color: var(--info)"
        );
        assert_eq!(chip_style(Chip::New), "background: var(--primary); color: #fff");
    }
}
