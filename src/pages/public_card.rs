//! Public card page, reached by owner username or by short card id.
//!
//! Loading counts a view. Visitors can like the card, save it as a vCard
//! when the owner allows downloads, and open the share dialog.

use bizcard_core::api::PublicCard as PublicCardData;
use bizcard_core::CardError;
use bizcard_ui::{Button, ButtonVariant, EmptyState, Notice, Spinner};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CardPreview, QrCodeView, ShareDialog};
use crate::context::{use_api, use_cancellation, use_config, use_notice, use_translator};
use crate::pages::cards::save_vcard;

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(PublicCardData),
    NotFound,
}

#[component]
pub fn PublicCard(username: String) -> Element {
    rsx! {
        PublicCardView { lookup: username }
    }
}

#[component]
pub fn ShortCard(card_id: String) -> Element {
    rsx! {
        PublicCardView { lookup: card_id }
    }
}

#[component]
fn PublicCardView(lookup: String) -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let config = use_config();
    let mut notice = use_notice();

    let mut state = use_signal(|| LoadState::Loading);
    let mut liked = use_signal(|| false);
    let mut sharing = use_signal(|| false);

    use_hook({
        let api = api.clone();
        let cancel = cancel.clone();
        let lookup = lookup.clone();
        move || {
            spawn(async move {
                let result = async {
                    let mut card = api.load_public_card(&lookup, &cancel).await?;
                    api.track_view(&mut card, &cancel).await?;
                    Ok::<_, CardError>(card)
                }
                .await;
                match result {
                    Ok(card) => {
                        tracing::debug!(key = %lookup, views = card.card.views, "Public card viewed");
                        state.set(LoadState::Ready(card));
                    }
                    Err(CardError::Cancelled) => {}
                    Err(e) => {
                        tracing::info!(key = %lookup, "Public card unavailable: {}", e);
                        state.set(LoadState::NotFound);
                    }
                }
            });
        }
    });

    let toggle_like = move |_| {
        let LoadState::Ready(mut card) = state.peek().clone() else {
            return;
        };
        let next = !liked();
        let api = api.clone();
        let cancel = cancel.clone();
        spawn(async move {
            match api.like_card(&mut card, next, &cancel).await {
                Ok(_) => {
                    liked.set(next);
                    state.set(LoadState::Ready(card));
                }
                Err(e) => {
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                }
            }
        });
    };

    let current = state();
    match current {
        LoadState::Loading => rsx! {
            div { class: "public-card-page",
                Spinner { label: t.t("common.loading") }
            }
        },
        LoadState::NotFound => rsx! {
            div { class: "public-card-page",
                EmptyState { icon: "\u{1FAAA}".to_string(), title: t.t("publicCard.notFound"),
                    p { class: "text-secondary", {t.t("publicCard.notFoundHint")} }
                    Link { class: "btn btn-contained", to: Route::Home {}, {t.t("notFound.goHome")} }
                }
            }
        },
        LoadState::Ready(data) => {
            let draft = data.card.draft.clone();
            let allow_download = draft.sharing.allow_download;
            let show_qr = draft.sharing.show_qr;
            let public_url = config.public_card_url(&data.username);
            let save = {
                let draft = draft.clone();
                move |_| {
                    let draft = draft.clone();
                    spawn(async move {
                        match save_vcard(draft).await {
                            Ok(Some(_)) => notice.set(Some(Notice::success(t.t("publicCard.contactSaved")))),
                            Ok(None) => {}
                            Err(e) => {
                                tracing::error!("Failed to save vCard: {}", e);
                                notice.set(Some(Notice::error(t.t("errors.generic"))));
                            }
                        }
                    });
                }
            };

            rsx! {
                div { class: "public-card-page",
                    CardPreview { draft: draft.clone() }
                    div { class: "public-card-actions",
                        if allow_download {
                            Button { onclick: save, {t.t("publicCard.saveContact")} }
                        }
                        Button {
                            variant: if liked() { ButtonVariant::Contained } else { ButtonVariant::Outlined },
                            onclick: toggle_like,
                            if liked() { "\u{2665} " } else { "\u{2661} " }
                            "{data.likes}"
                        }
                        Button {
                            variant: ButtonVariant::Outlined,
                            onclick: move |_| sharing.set(true),
                            {t.t("cards.share")}
                        }
                    }
                    p { class: "text-secondary public-card-stats",
                        {t.t_with("publicCard.views", &[("count", data.card.views.to_string().as_str())])}
                    }
                    if show_qr {
                        div { class: "card public-card-qr",
                            QrCodeView { data: public_url, size: 160, color: draft.design.primary_color.clone() }
                            p { class: "text-secondary", {t.t("publicCard.scanToSave")} }
                        }
                    }
                    if sharing() {
                        ShareDialog {
                            username: data.username.clone(),
                            card_id: data.card.id.clone(),
                            on_close: move |_| sharing.set(false),
                        }
                    }
                }
            }
        }
    }
}
