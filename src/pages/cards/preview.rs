//! Full-size preview of a saved card with zoom, share and vCard export.

use std::path::PathBuf;

use bizcard_core::auth::UserProfile;
use bizcard_core::card::{to_vcard, vcard_file_name};
use bizcard_core::dashboard::format_count;
use bizcard_core::{CardDraft, CardError, SavedCard};
use bizcard_ui::{Alert, Button, ButtonVariant, Notice, Severity, Slider, Spinner};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::app::Route;
use crate::components::{CardPreview, PageHeader, ShareDialog};
use crate::context::{use_api, use_cancellation, use_notice, use_session, use_translator};

/// Ask for a destination and write the draft as a `.vcf` file. Returns the
/// written path, or `None` when the dialog was cancelled.
pub async fn save_vcard(draft: CardDraft) -> std::io::Result<Option<PathBuf>> {
    let file_name = vcard_file_name(&draft);
    let picked = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter("vCard", &["vcf"])
            .set_file_name(&file_name)
            .save_file()
    })
    .await
    .map_err(std::io::Error::other)?;

    let Some(path) = picked else {
        return Ok(None);
    };
    tokio::fs::write(&path, to_vcard(&draft)).await?;
    tracing::info!(path = %path.display(), "vCard saved");
    Ok(Some(path))
}

#[component]
pub fn PreviewCard(id: String) -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let session = use_session();
    let mut notice = use_notice();

    let mut card = use_signal(|| Option::<SavedCard>::None);
    let mut load_error = use_signal(|| Option::<&'static str>::None);
    let mut zoom = use_signal(|| 1.0_f64);
    let mut sharing = use_signal(|| false);

    use_hook({
        let id = id.clone();
        move || {
            spawn(async move {
                match api.load_card(&id, &cancel).await {
                    Ok(loaded) => card.set(Some(loaded)),
                    Err(CardError::Cancelled) => {}
                    Err(e) => {
                        tracing::warn!(id = %id, "Failed to load card: {}", e);
                        load_error.set(Some(e.alert_key()));
                    }
                }
            });
        }
    });

    if let Some(key) = load_error() {
        return rsx! {
            Alert { severity: Severity::Error, {t.t(key)} }
            Link { class: "btn btn-outlined", to: Route::MyCards {}, {t.t("editCard.backToCards")} }
        };
    }
    let Some(loaded) = card() else {
        return rsx! {
            Spinner { label: t.t("common.loading") }
        };
    };

    let download = {
        let draft = loaded.draft.clone();
        move |_| {
            let draft = draft.clone();
            spawn(async move {
                match save_vcard(draft).await {
                    Ok(Some(path)) => {
                        let shown = path.display().to_string();
                        notice.set(Some(Notice::success(
                            t.t_with("preview.vcardSaved", &[("path", shown.as_str())]),
                        )));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!("Failed to save vCard: {}", e);
                        notice.set(Some(Notice::error(t.t("errors.generic"))));
                    }
                }
            });
        }
    };

    let username = session
        .read()
        .as_ref()
        .map(|s| s.user.username.clone())
        .unwrap_or_else(|| UserProfile::default().username);

    rsx! {
        PageHeader { title: t.t("preview.title"), subtitle: loaded.draft.full_name(),
            Link {
                class: "btn btn-outlined",
                to: Route::EditCard { id: loaded.id.clone() },
                {t.t("cards.edit")}
            }
            Button { variant: ButtonVariant::Outlined, onclick: download, {t.t("preview.downloadVcard")} }
            Button { onclick: move |_| sharing.set(true), {t.t("cards.share")} }
        }
        div { class: "preview-layout",
            div { class: "preview-stage",
                CardPreview { draft: loaded.draft.clone(), scale: zoom() as f32 }
            }
            aside { class: "card preview-side",
                Slider {
                    label: t.t("preview.zoom"),
                    value: zoom(),
                    min: 0.5,
                    max: 1.5,
                    step: 0.1,
                    onchange: move |v: f64| zoom.set(v),
                }
                dl { class: "meta-list",
                    dt { {t.t("cards.status")} }
                    dd { {t.t(loaded.status.label_key())} }
                    dt { {t.t("cards.views")} }
                    dd { {format_count(loaded.views as u64)} }
                    dt { {t.t("cards.shares")} }
                    dd { {format_count(loaded.shares as u64)} }
                    dt { {t.t("cards.template")} }
                    dd { {t.t(loaded.draft.design.template.name_key())} }
                }
            }
        }
        if sharing() {
            ShareDialog {
                username,
                card_id: loaded.id.clone(),
                on_close: move |_| sharing.set(false),
            }
        }
    }
}
