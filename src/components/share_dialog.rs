//! Share dialog: public link, short link, QR code and copy buttons.

use std::time::Duration;

use bizcard_ui::{Button, ButtonVariant, CloseButton};
use dioxus::prelude::*;

use crate::components::QrCodeView;
use crate::context::{use_config, use_translator};

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                false
            }
        },
        Err(e) => {
            tracing::warn!("Clipboard not available: {}", e);
            false
        }
    }
}

/// Read-only link field with a copy button that flips to "copied" for two
/// seconds.
#[component]
pub fn CopyField(label: String, value: String) -> Element {
    let t = use_translator();
    let mut copied = use_signal(|| false);

    let copy = {
        let value = value.clone();
        move |_| {
            if copy_to_clipboard(&value) {
                copied.set(true);
                spawn(async move {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    copied.set(false);
                });
            }
        }
    };

    rsx! {
        div { class: "form-field",
            label { class: "input-label", "{label}" }
            div { class: "copy-field",
                input { class: "input-field", readonly: true, value: "{value}" }
                Button {
                    variant: if copied() { ButtonVariant::Contained } else { ButtonVariant::Outlined },
                    onclick: copy,
                    if copied() {
                        {t.t("share.copied")}
                    } else {
                        {t.t("share.copy")}
                    }
                }
            }
        }
    }
}

#[component]
pub fn ShareDialog(
    /// Public profile name used in the long link.
    username: String,
    card_id: String,
    on_close: EventHandler<()>,
) -> Element {
    let t = use_translator();
    let config = use_config();
    let public_url = config.public_card_url(&username);
    let short_url = config.short_card_url(&card_id);
    let encoded = urlencoding::encode(&public_url).into_owned();

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        div { class: "modal share-dialog", role: "dialog",
            div { class: "modal-header",
                h3 { {t.t("share.title")} }
                CloseButton { onclick: move |_| on_close.call(()), label: t.t("common.close") }
            }
            div { class: "modal-body",
                div { class: "share-qr",
                    QrCodeView { data: public_url.clone(), size: 180 }
                }
                CopyField { label: t.t("share.publicLink"), value: public_url.clone() }
                CopyField { label: t.t("share.shortLink"), value: short_url }
                div { class: "share-targets",
                    a {
                        class: "btn btn-outlined",
                        href: "mailto:?body={encoded}",
                        {t.t("share.email")}
                    }
                    a {
                        class: "btn btn-outlined",
                        href: "https://wa.me/?text={encoded}",
                        "WhatsApp"
                    }
                    a {
                        class: "btn btn-outlined",
                        href: "https://www.linkedin.com/sharing/share-offsite/?url={encoded}",
                        "LinkedIn"
                    }
                }
            }
        }
    }
}
