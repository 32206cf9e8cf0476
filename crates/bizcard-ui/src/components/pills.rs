//! Pill Selectors
//!
//! Single-choice rows of pills: template category filter, card status
//! filter, color mode and layout switches in the customizer drawer.

use dioxus::prelude::*;

/// One selectable pill.
#[derive(Clone, PartialEq, Debug)]
pub struct PillOption {
    pub value: String,
    pub label: String,
    /// Optional leading glyph
    pub icon: Option<String>,
}

impl PillOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Properties for the PillGroup component
#[derive(Clone, PartialEq, Props)]
pub struct PillGroupProps {
    pub options: Vec<PillOption>,
    /// Currently selected value
    pub selected: String,
    pub on_select: EventHandler<String>,
    /// Accessible name of the group
    #[props(default)]
    pub aria_label: String,
}

/// Horizontal row of selectable pills
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(|| "all".to_string());
///
/// rsx! {
///     PillGroup {
///         options: vec![
///             PillOption::new("all", t.t("cards.all")),
///             PillOption::new("active", t.t("cards.active")),
///         ],
///         selected: filter(),
///         on_select: move |v| filter.set(v),
///     }
/// }
/// ```
#[component]
pub fn PillGroup(props: PillGroupProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "pill-group",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for opt in props.options.iter() {
                {
                    let value = opt.value.clone();
                    let is_selected = selected == opt.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{opt.value}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            r#type: "button",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(value.clone()),
                            if let Some(icon) = &opt.icon {
                                span { class: "pill-icon", "{icon}" }
                            }
                            "{opt.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Circular color swatch (theme picker).
#[component]
pub fn Swatch(color: String, selected: bool, label: String, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if selected { "swatch selected" } else { "swatch" },
            r#type: "button",
            title: "{label}",
            "aria-label": "{label}",
            "aria-pressed": if selected { "true" } else { "false" },
            style: "background: {color}",
            onclick: move |_| on_click.call(()),
            if selected {
                span { class: "swatch-check", "\u{2713}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_option_builders() {
        let opt = PillOption::new("dark", "Dark").with_icon("\u{263E}");
        assert_eq!(opt.value, "dark");
        assert_eq!(opt.label, "Dark");
        assert_eq!(opt.icon.as_deref(), Some("\u{263E}"));
        assert!(PillOption::new("a", "A").icon.is_none());
    }
}
