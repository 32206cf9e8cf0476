//! Alerts and Snackbars
//!
//! Inline alerts inside forms and the transient snackbar shown after
//! save, copy and download actions.

use std::time::Duration;

use bizcard_core::CardError;
use dioxus::prelude::*;

/// How long a snackbar stays visible.
pub const SNACKBAR_TIMEOUT: Duration = Duration::from_secs(3);

/// Alert color semantics
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "alert alert-success",
            Severity::Info => "alert alert-info",
            Severity::Warning => "alert alert-warning",
            Severity::Error => "alert alert-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "\u{2714}",
            Severity::Info => "\u{2139}",
            Severity::Warning => "\u{26A0}",
            Severity::Error => "\u{2716}",
        }
    }
}

/// A message waiting to be shown, already translated.
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Translate an error through its alert key. Cancellation is silent.
    pub fn from_error(err: &CardError, translate: impl Fn(&str) -> String) -> Option<Self> {
        match err {
            CardError::Cancelled => None,
            other => Some(Self::error(translate(other.alert_key()))),
        }
    }
}

/// Inline alert box
#[component]
pub fn Alert(
    severity: Severity,
    children: Element,
    #[props(default)] on_close: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "{severity.class()}", role: "alert",
            span { class: "alert-icon", "{severity.icon()}" }
            div { class: "alert-body", {children} }
            if let Some(on_close) = on_close {
                button {
                    class: "alert-close",
                    r#type: "button",
                    "aria-label": "close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
            }
        }
    }
}

/// Bottom snackbar. Clears its signal after [`SNACKBAR_TIMEOUT`].
#[component]
pub fn Snackbar(notice: Signal<Option<Notice>>) -> Element {
    let mut notice = notice;
    let current = notice.read().clone();

    use_effect(move || {
        if notice.read().is_some() {
            spawn(async move {
                tokio::time::sleep(SNACKBAR_TIMEOUT).await;
                notice.set(None);
            });
        }
    });

    match current {
        Some(n) => rsx! {
            div { class: "snackbar",
                Alert {
                    severity: n.severity,
                    on_close: move |_| notice.set(None),
                    "{n.message}"
                }
            }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::Success.class(), "alert alert-success");
        assert_eq!(Severity::Error.class(), "alert alert-error");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn notice_from_error_uses_alert_key() {
        let notice = Notice::from_error(&CardError::InvalidToken, |k| format!("<{k}>")).unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "<errors.invalidToken>");
    }

    #[test]
    fn cancelled_errors_are_silent() {
        assert!(Notice::from_error(&CardError::Cancelled, |k| k.to_string()).is_none());
    }
}
