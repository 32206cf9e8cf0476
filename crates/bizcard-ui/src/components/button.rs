//! Button Components
//!
//! - Contained: main action, filled with the theme primary color
//! - Outlined: secondary action
//! - Text: low-emphasis action
//! - Danger: destructive action (delete, discard)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Contained,
    Outlined,
    Text,
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Contained => "btn btn-contained",
            ButtonVariant::Outlined => "btn btn-outlined",
            ButtonVariant::Text => "btn btn-text",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner and disables the button
    #[props(default = false)]
    pub loading: bool,
    /// Optional leading icon glyph
    #[props(default)]
    pub icon: Option<String>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Join a base class with optional extras.
pub fn class_list(base: &str, extra: Option<&str>, flags: &[(bool, &str)]) -> String {
    let mut out = base.to_string();
    for (on, class) in flags {
        if *on {
            out.push(' ');
            out.push_str(class);
        }
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        out.push(' ');
        out.push_str(extra);
    }
    out
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Contained,
///         loading: saving(),
///         onclick: move |_| save(),
///         "Save"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(
        props.variant.class(),
        props.class.as_deref(),
        &[(props.full_width, "btn-block"), (props.loading, "btn-loading")],
    );

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled || props.loading,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.loading {
                span { class: "spinner spinner-sm" }
            } else if let Some(icon) = &props.icon {
                span { class: "btn-icon", "{icon}" }
            }
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, delete row, toggle sidebar)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref(), &[]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{props.aria_label}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default = "Close".to_string())] label: String) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: label,
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Contained.class(), "btn btn-contained");
        assert_eq!(ButtonVariant::Outlined.class(), "btn btn-outlined");
        assert_eq!(ButtonVariant::Text.class(), "btn btn-text");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Contained);
    }

    #[test]
    fn class_list_joins_flags_and_extra() {
        assert_eq!(class_list("btn", None, &[]), "btn");
        assert_eq!(
            class_list("btn", Some("wide"), &[(true, "a"), (false, "b")]),
            "btn a wide"
        );
        assert_eq!(class_list("btn", Some(""), &[]), "btn");
    }
}
