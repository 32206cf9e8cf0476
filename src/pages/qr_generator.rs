//! QR generator: content form, image options and a live preview rendered by
//! the remote image endpoint.

use std::time::Duration;

use bizcard_core::qr::{
    default_file_name, download_png, ErrorCorrection, QrField, WifiSecurity, MARGIN_MAX, SIZE_RANGE,
    SIZE_STEP,
};
use bizcard_core::task::{self, TaskHandle};
use bizcard_core::{CardError, QrForm, QrKind, QrOptions};
use bizcard_ui::{
    Button, ButtonVariant, ColorField, Input, Notice, PillGroup, PillOption, Select, SelectOption,
    Slider, Spinner, TextArea,
};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::components::{copy_to_clipboard, PageHeader};
use crate::context::{use_cancellation, use_config, use_notice, use_translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QrTab {
    Content,
    Design,
}

impl QrTab {
    fn as_str(&self) -> &'static str {
        match self {
            QrTab::Content => "content",
            QrTab::Design => "design",
        }
    }
}

fn security_label_key(security: WifiSecurity) -> &'static str {
    match security {
        WifiSecurity::Wpa => "qr.security.wpa",
        WifiSecurity::Wep => "qr.security.wep",
        WifiSecurity::NoPass => "qr.security.open",
    }
}

/// Placeholder for `field`. Only the first field of a type uses the
/// type's example value.
fn field_placeholder(kind: QrKind, field: QrField) -> Option<String> {
    let first = kind.fields().first().copied();
    if first == Some(field) && !kind.placeholder().is_empty() {
        return Some(kind.placeholder().to_string());
    }
    None
}

/// Simulated generation delay, then the image URL.
fn spawn_render(url: String, delay: Duration) -> TaskHandle<String> {
    TaskHandle::spawn(move |token| async move {
        task::delay(&token, delay).await?;
        Ok(url)
    })
}

#[component]
pub fn QrGenerator() -> Element {
    let t = use_translator();
    let config = use_config();
    let cancel = use_cancellation();
    let mut notice = use_notice();

    let mut form = use_signal(QrForm::default);
    let mut options = use_signal(QrOptions::default);
    let mut tab = use_signal(|| QrTab::Content);
    let mut image_url = use_signal(|| Option::<String>::None);
    let mut generating = use_signal(|| false);
    let mut downloading = use_signal(|| false);
    let mut copied = use_signal(|| false);
    let mut pending = use_signal(|| Option::<Task>::None);

    let endpoint = config.qr_endpoint.clone();
    let delay = config.api.qr();

    // Every form or option change supersedes the previous render.
    use_effect(move || {
        let payload = form.read().renderable_payload();
        let url = payload.map(|p| options.read().render_url(&endpoint, &p));

        if let Some(previous) = pending.write().take() {
            previous.cancel();
        }

        let Some(url) = url else {
            image_url.set(None);
            generating.set(false);
            return;
        };

        generating.set(true);
        let task = spawn(async move {
            match spawn_render(url, delay).join().await {
                Ok(url) => {
                    tracing::debug!(%url, "QR image URL ready");
                    image_url.set(Some(url));
                }
                Err(CardError::Cancelled) => {}
                Err(e) => tracing::warn!("QR render failed: {}", e),
            }
            generating.set(false);
        });
        pending.set(Some(task));
    });

    let download = move |_| {
        let Some(url) = image_url() else {
            return;
        };
        downloading.set(true);
        let cancel = cancel.clone();
        spawn(async move {
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("PNG", &["png"])
                    .set_file_name(default_file_name())
                    .save_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match download_png(&url, &path, &cancel).await {
                    Ok(written) => {
                        let shown = written.display().to_string();
                        notice.set(Some(Notice::success(t.t_with("qr.downloaded", &[("path", &shown)]))));
                    }
                    Err(e) => {
                        tracing::warn!("QR download failed: {}", e);
                        if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                            notice.set(Some(n));
                        }
                    }
                },
                Ok(None) => {}
                Err(e) => tracing::error!("Save dialog task failed: {:?}", e),
            }
            downloading.set(false);
        });
    };

    let copy_url = move |_| {
        let Some(url) = image_url() else {
            return;
        };
        if copy_to_clipboard(&url) {
            copied.set(true);
            spawn(async move {
                tokio::time::sleep(Duration::from_secs(2)).await;
                copied.set(false);
            });
        }
    };

    let f = form.read().clone();
    let o = options.read().clone();
    let kind = f.kind;
    let alt = t.t("qr.title");

    let kind_options: Vec<PillOption> = QrKind::all()
        .iter()
        .map(|k| PillOption::new(k.as_str(), t.t(k.label_key())))
        .collect();
    let tab_options = vec![
        PillOption::new(QrTab::Content.as_str(), t.t("qr.tabs.content")),
        PillOption::new(QrTab::Design.as_str(), t.t("qr.tabs.design")),
    ];
    let security_options: Vec<SelectOption> = WifiSecurity::all()
        .iter()
        .map(|s| SelectOption::new(s.as_str(), t.t(security_label_key(*s))))
        .collect();
    let ecc_options: Vec<SelectOption> = ErrorCorrection::all()
        .iter()
        .map(|e| SelectOption::new(e.as_str(), t.t(e.label_key())))
        .collect();

    rsx! {
        div { class: "page qr-generator",
            PageHeader { title: t.t("qr.title"), subtitle: t.t("qr.description") }

            div { class: "qr-layout",
                div { class: "card qr-form",
                    PillGroup {
                        options: tab_options,
                        selected: tab().as_str().to_string(),
                        on_select: move |v: String| {
                            tab.set(if v == QrTab::Design.as_str() { QrTab::Design } else { QrTab::Content });
                        },
                    }

                    {match tab() {
                        QrTab::Content => rsx! {
                            section {
                                h4 { {t.t("qr.selectType")} }
                                PillGroup {
                                    options: kind_options,
                                    selected: kind.as_str().to_string(),
                                    aria_label: t.t("qr.selectType"),
                                    on_select: move |v: String| {
                                        if let Ok(kind) = v.parse::<QrKind>() {
                                            form.write().kind = kind;
                                        }
                                    },
                                }
                            }
                            section {
                                h4 { {t.t("qr.enterData")} }
                                for field in kind.fields().iter().copied() {
                                    {
                                        let value = f.value(field).to_string();
                                        let label = t.t(field.label_key());
                                        let on_value = move |v: String| {
                                            if let Err(e) = form.write().set(field, v) {
                                                tracing::warn!("Rejected QR field value: {}", e);
                                            }
                                        };
                                        if field == QrField::Security {
                                            rsx! {
                                                Select {
                                                    key: "{field.label_key()}",
                                                    label: label,
                                                    value: value,
                                                    options: security_options.clone(),
                                                    onchange: on_value,
                                                }
                                            }
                                        } else if field.is_multiline() {
                                            rsx! {
                                                TextArea {
                                                    key: "{field.label_key()}",
                                                    label: label,
                                                    value: value,
                                                    rows: 3,
                                                    oninput: on_value,
                                                }
                                            }
                                        } else {
                                            rsx! {
                                                Input {
                                                    key: "{field.label_key()}",
                                                    label: label,
                                                    value: value,
                                                    input_type: if field == QrField::Password { "password".to_string() } else { "text".to_string() },
                                                    placeholder: field_placeholder(kind, field),
                                                    oninput: on_value,
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        QrTab::Design => rsx! {
                            section {
                                h4 { {t.t("qr.customizeDesign")} }
                                Slider {
                                    label: t.t("qr.size"),
                                    value: o.size as f64,
                                    min: SIZE_RANGE.0 as f64,
                                    max: SIZE_RANGE.1 as f64,
                                    step: SIZE_STEP as f64,
                                    unit: "px".to_string(),
                                    onchange: move |v: f64| options.write().set_size(v.round() as u32),
                                }
                                div { class: "form-grid",
                                    ColorField {
                                        label: t.t("qr.foregroundColor"),
                                        value: o.foreground.clone(),
                                        onchange: move |v: String| options.write().foreground = v,
                                    }
                                    ColorField {
                                        label: t.t("qr.backgroundColor"),
                                        value: o.background.clone(),
                                        onchange: move |v: String| options.write().background = v,
                                    }
                                }
                                Select {
                                    label: t.t("qr.errorCorrection"),
                                    value: o.error_correction.as_str().to_string(),
                                    options: ecc_options,
                                    onchange: move |v: String| {
                                        if let Ok(ecc) = v.parse::<ErrorCorrection>() {
                                            options.write().error_correction = ecc;
                                        }
                                    },
                                }
                                Slider {
                                    label: t.t("qr.margin"),
                                    value: o.margin as f64,
                                    min: 0.0,
                                    max: MARGIN_MAX as f64,
                                    unit: "px".to_string(),
                                    onchange: move |v: f64| options.write().set_margin(v.round() as u32),
                                }
                                Button {
                                    variant: ButtonVariant::Text,
                                    onclick: move |_| options.set(QrOptions::default()),
                                    {t.t("qr.resetToDefault")}
                                }
                            }
                        },
                    }}
                }

                div { class: "card qr-preview",
                    h4 { {t.t("qr.preview")} }
                    div { class: "qr-image-frame",
                        if generating() {
                            Spinner { label: t.t("qr.generating") }
                        } else if let Some(url) = image_url() {
                            img {
                                class: "qr-image",
                                src: "{url}",
                                alt: "{alt}",
                                width: "{o.size}",
                                height: "{o.size}",
                            }
                        } else {
                            p { class: "text-secondary", {t.t("qr.enterDataToGenerate")} }
                        }
                    }
                    dl { class: "meta-list",
                        dt { {t.t("qr.type")} }
                        dd { {t.t(kind.label_key())} }
                        dt { {t.t("qr.size")} }
                        dd { "{o.size} \u{00D7} {o.size}" }
                        dt { {t.t("qr.errorCorrection")} }
                        dd { {t.t(o.error_correction.label_key())} }
                    }
                    div { class: "qr-actions",
                        Button {
                            icon: "\u{2B07}".to_string(),
                            disabled: image_url().is_none(),
                            loading: downloading(),
                            onclick: download,
                            {t.t("qr.download")}
                        }
                        Button {
                            variant: ButtonVariant::Outlined,
                            disabled: image_url().is_none(),
                            onclick: copy_url,
                            if copied() {
                                {t.t("qr.copied")}
                            } else {
                                {t.t("qr.copyUrl")}
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
    fn test_only_first_field_gets_example_placeholder() {
        assert_eq!(
            field_placeholder(QrKind::Email, QrField::Email).as_deref(),
            Some("example@domain.com")
        );
        assert_eq!(field_placeholder(QrKind::Email, QrField::Subject), None);
        assert_eq!(field_placeholder(QrKind::Text, QrField::Text), None);
    }

    #[tokio::test]
    async fn test_superseded_render_is_cancelled() {
        let first = spawn_render("a".to_string(), Duration::from_secs(60));
        let token = first.token().clone();
        drop(first);
        assert!(token.is_cancelled());

        let second = spawn_render("b".to_string(), Duration::from_millis(1));
        assert_eq!(second.join().await.unwrap(), "b");
    }

    #[tokio::test]
    async fn test_cancelled_render_reports_cancelled() {
        let render = spawn_render("c".to_string(), Duration::from_secs(60));
        render.cancel();
        assert!(matches!(render.join().await, Err(CardError::Cancelled)));
    }
}
