//! Slider and Switch Controls
//!
//! Used by the theme customizer drawer and the card design step.

use dioxus::prelude::*;

use super::button::class_list;

/// Parse a range input value, falling back to `current` on garbage.
pub fn parse_slider(raw: &str, current: f64) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(current)
}

/// Percentage of the track filled for `value` in `[min, max]`.
pub fn fill_percent(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// Properties for the Slider component
#[derive(Clone, PartialEq, Props)]
pub struct SliderProps {
    pub label: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    #[props(default = 1.0)]
    pub step: f64,
    /// Suffix after the value readout (`px`, `%`)
    #[props(default)]
    pub unit: String,
    pub onchange: EventHandler<f64>,
}

/// Labelled range input with a value readout
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Slider {
///         label: t.t("customizer.borderRadius"),
///         value: customizer.read().border_radius as f64,
///         min: 4.0,
///         max: 24.0,
///         unit: "px".to_string(),
///         onchange: move |v: f64| { customizer.write().set_border_radius(v as i64); },
///     }
/// }
/// ```
#[component]
pub fn Slider(props: SliderProps) -> Element {
    let fill = fill_percent(props.value, props.min, props.max);
    let readout = if props.step < 1.0 {
        format!("{:.1}{}", props.value, props.unit)
    } else {
        format!("{}{}", props.value.round(), props.unit)
    };
    let current = props.value;

    rsx! {
        div { class: "slider-field",
            div { class: "slider-header",
                span { class: "input-label", "{props.label}" }
                span { class: "slider-value", "{readout}" }
            }
            input {
                class: "slider",
                r#type: "range",
                min: "{props.min}",
                max: "{props.max}",
                step: "{props.step}",
                value: "{props.value}",
                style: "--fill: {fill}%",
                oninput: move |e| props.onchange.call(parse_slider(&e.value(), current)),
            }
        }
    }
}

/// On/off toggle with a label
#[component]
pub fn Switch(
    label: String,
    checked: bool,
    onchange: EventHandler<bool>,
    #[props(default)] description: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let class = class_list("switch", None, &[(checked, "on"), (disabled, "disabled")]);

    rsx! {
        label { class: "switch-row",
            div { class: "switch-text",
                span { class: "switch-label", "{label}" }
                if let Some(description) = description {
                    span { class: "switch-description", "{description}" }
                }
            }
            button {
                class: "{class}",
                r#type: "button",
                role: "switch",
                disabled: disabled,
                "aria-checked": if checked { "true" } else { "false" },
                onclick: move |_| onchange.call(!checked),
                span { class: "switch-thumb" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slider_falls_back() {
        assert_eq!(parse_slider("12", 4.0), 12.0);
        assert_eq!(parse_slider(" 0.7 ", 1.0), 0.7);
        assert_eq!(parse_slider("abc", 4.0), 4.0);
        assert_eq!(parse_slider("NaN", 4.0), 4.0);
    }

    #[test]
    fn fill_percent_bounds() {
        assert_eq!(fill_percent(4.0, 4.0, 24.0), 0.0);
        assert_eq!(fill_percent(24.0, 4.0, 24.0), 100.0);
        assert_eq!(fill_percent(14.0, 4.0, 24.0), 50.0);
        assert_eq!(fill_percent(99.0, 4.0, 24.0), 100.0);
        assert_eq!(fill_percent(1.0, 5.0, 5.0), 0.0);
    }
}
