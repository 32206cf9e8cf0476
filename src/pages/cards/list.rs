//! "My cards": the sample cards plus anything saved in this session, with
//! search, status filter and grid/list views.

use std::collections::HashSet;

use bizcard_core::auth::UserProfile;
use bizcard_core::card::CardStatus;
use bizcard_core::dashboard::{format_count, CardFilter, CardSummary, StatusFilter, ViewMode};
use bizcard_core::CardError;
use bizcard_ui::{
    Badge, Button, ButtonVariant, CloseButton, EmptyState, IconButton, Notice, PillGroup,
    PillOption, SearchInput, Spinner,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{PageHeader, ShareDialog};
use crate::context::{use_api, use_cancellation, use_notice, use_session, use_translator};

fn status_style(status: CardStatus) -> &'static str {
    match status {
        CardStatus::Active => "background: var(--success); color: #fff",
        CardStatus::Draft => "background: var(--warning); color: #fff",
        CardStatus::Inactive => "border: 1px solid var(--divider); color: var(--text-secondary)",
    }
}

fn filter_value(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "all",
        StatusFilter::Only(status) => status.as_str(),
    }
}

/// Session cards first, newest first, then the samples.
fn merge_cards(saved: &[CardSummary], samples: Vec<CardSummary>) -> Vec<CardSummary> {
    let mut out: Vec<CardSummary> = saved.to_vec();
    out.extend(samples.into_iter().filter(|s| !saved.iter().any(|c| c.id == s.id)));
    out
}

#[component]
pub fn MyCards() -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let session = use_session();
    let mut notice = use_notice();

    let mut cards = use_signal(Vec::<CardSummary>::new);
    let mut saved_ids = use_signal(HashSet::<String>::new);
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(CardFilter::default);
    let mut view = use_signal(ViewMode::default);
    let mut confirm_delete = use_signal(|| Option::<CardSummary>::None);
    let mut share_target = use_signal(|| Option::<CardSummary>::None);

    use_hook({
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            spawn(async move {
                match api.list_cards(&cancel).await {
                    Ok(saved) => {
                        let summaries: Vec<CardSummary> = saved.iter().map(CardSummary::from).collect();
                        saved_ids.set(summaries.iter().map(|c| c.id.clone()).collect());
                        cards.set(merge_cards(&summaries, CardSummary::sample()));
                    }
                    Err(CardError::Cancelled) => return,
                    Err(e) => {
                        tracing::warn!("Failed to list cards: {}", e);
                        cards.set(CardSummary::sample());
                    }
                }
                loading.set(false);
            });
        }
    });

    let toggle_status = {
        let api = api.clone();
        let cancel = cancel.clone();
        move |card: CardSummary| {
            let next = if card.status == CardStatus::Active {
                CardStatus::Inactive
            } else {
                CardStatus::Active
            };
            let persisted = saved_ids.peek().contains(&card.id);
            let api = api.clone();
            let cancel = cancel.clone();
            spawn(async move {
                if persisted {
                    if let Err(e) = api.set_status(&card.id, next, &cancel).await {
                        if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                            notice.set(Some(n));
                        }
                        return;
                    }
                }
                if let Some(c) = cards.write().iter_mut().find(|c| c.id == card.id) {
                    c.status = next;
                }
            });
        }
    };

    let delete = move |card: CardSummary| {
        let persisted = saved_ids.peek().contains(&card.id);
        let api = api.clone();
        let cancel = cancel.clone();
        confirm_delete.set(None);
        spawn(async move {
            if persisted {
                if let Err(e) = api.delete_card(&card.id, &cancel).await {
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                    return;
                }
                saved_ids.write().remove(&card.id);
            }
            cards.write().retain(|c| c.id != card.id);
            notice.set(Some(Notice::success(t.t("cards.deleted"))));
        });
    };

    let f = filter.read().clone();
    let all_cards = cards.read().clone();
    let visible: Vec<CardSummary> = f.apply(&all_cards).into_iter().cloned().collect();
    let status_options: Vec<PillOption> = StatusFilter::all()
        .iter()
        .map(|s| PillOption::new(filter_value(*s), t.t(s.label_key())))
        .collect();
    let view_mode = view();
    let username = session
        .read()
        .as_ref()
        .map(|s| s.user.username.clone())
        .unwrap_or_else(|| UserProfile::default().username);

    rsx! {
        PageHeader { title: t.t("cards.title"), subtitle: t.t("cards.subtitle"),
            Link {
                class: "btn btn-contained",
                to: Route::CreateCard { template: String::new() },
                "+ "
                {t.t("cards.createNew")}
            }
        }
        div { class: "card toolbar",
            SearchInput {
                value: f.search.clone(),
                placeholder: t.t("cards.search"),
                oninput: move |v: String| filter.write().search = v,
            }
            PillGroup {
                options: status_options,
                selected: filter_value(f.status).to_string(),
                on_select: move |v: String| {
                    let status = StatusFilter::all()
                        .into_iter()
                        .find(|s| filter_value(*s) == v)
                        .unwrap_or_default();
                    filter.write().status = status;
                },
            }
            div { class: "view-toggle",
                IconButton {
                    aria_label: t.t("cards.gridView"),
                    class: if view_mode == ViewMode::Grid { "active".to_string() } else { String::new() },
                    onclick: move |_| view.set(ViewMode::Grid),
                    "\u{25A6}"
                }
                IconButton {
                    aria_label: t.t("cards.listView"),
                    class: if view_mode == ViewMode::List { "active".to_string() } else { String::new() },
                    onclick: move |_| view.set(ViewMode::List),
                    "\u{2630}"
                }
            }
        }
        if loading() {
            Spinner { label: t.t("common.loading") }
        } else if visible.is_empty() {
            EmptyState { icon: "\u{1FAAA}".to_string(), title: t.t("cards.empty"),
                p { class: "text-secondary", {t.t("cards.emptyHint")} }
            }
        } else {
            div { class: if view_mode == ViewMode::Grid { "card-grid" } else { "card-list" },
                for card in visible {
                    {
                        let c_status = card.clone();
                        let c_share = card.clone();
                        let c_delete = card.clone();
                        let mut toggle_status = toggle_status.clone();
                        rsx! {
                            div { key: "{card.id}", class: "card card-summary",
                                div { class: "card-summary-header", style: "background: {card.template.gradient()};",
                                    Badge { label: t.t(card.status.label_key()), style: status_style(card.status).to_string() }
                                    if card.is_public {
                                        span { class: "public-flag", title: t.t("cards.public"), "\u{1F310}" }
                                    }
                                }
                                div { class: "card-summary-body",
                                    h3 { "{card.name}" }
                                    p { class: "text-secondary",
                                        {t.t_with("cards.lastUpdated", &[("date", card.last_updated.to_string().as_str())])}
                                    }
                                    div { class: "card-summary-stats",
                                        span { title: t.t("cards.views"), "\u{1F441} ", {format_count(card.views)} }
                                        span { title: t.t("cards.shares"), "\u{2197} ", {format_count(card.shares)} }
                                        span { title: t.t("cards.qrScans"), "\u{25A6} ", {format_count(card.qr_scans)} }
                                    }
                                }
                                div { class: "card-summary-actions",
                                    Link { class: "btn btn-text", to: Route::PreviewCard { id: card.id.clone() }, {t.t("cards.view")} }
                                    Link { class: "btn btn-text", to: Route::EditCard { id: card.id.clone() }, {t.t("cards.edit")} }
                                    Button {
                                        variant: ButtonVariant::Text,
                                        onclick: move |_| share_target.set(Some(c_share.clone())),
                                        {t.t("cards.share")}
                                    }
                                    Button {
                                        variant: ButtonVariant::Text,
                                        onclick: move |_| toggle_status(c_status.clone()),
                                        if card.status == CardStatus::Active {
                                            {t.t("cards.deactivate")}
                                        } else {
                                            {t.t("cards.activate")}
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        onclick: move |_| confirm_delete.set(Some(c_delete.clone())),
                                        {t.t("cards.delete")}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(card) = confirm_delete() {
            div { class: "modal-backdrop", onclick: move |_| confirm_delete.set(None) }
            div { class: "modal", role: "dialog",
                div { class: "modal-header",
                    h3 { {t.t("cards.deleteTitle")} }
                    CloseButton { onclick: move |_| confirm_delete.set(None), label: t.t("common.close") }
                }
                div { class: "modal-body",
                    p { {t.t_with("cards.deleteConfirm", &[("name", card.name.as_str())])} }
                }
                div { class: "modal-footer",
                    Button {
                        variant: ButtonVariant::Outlined,
                        onclick: move |_| confirm_delete.set(None),
                        {t.t("common.cancel")}
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: {
                            let mut delete = delete.clone();
                            let card = card.clone();
                            move |_| delete(card.clone())
                        },
                        {t.t("cards.delete")}
                    }
                }
            }
        }
        if let Some(card) = share_target() {
            ShareDialog {
                username: username.clone(),
                card_id: card.id.clone(),
                on_close: move |_| share_target.set(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_session_cards_first() {
        let mut saved = CardSummary::sample()[0].clone();
        saved.id = "01hx".into();
        saved.name = "Fresh".into();

        let merged = merge_cards(&[saved], CardSummary::sample());
        assert_eq!(merged.len(), 4);
        assert_eq!(merged[0].name, "Fresh");
    }

    #[test]
    fn test_merge_drops_shadowed_samples() {
        let saved = CardSummary::sample()[1].clone();
        let merged = merge_cards(&[saved], CardSummary::sample());
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_filter_values_are_distinct() {
        let values: HashSet<&str> = StatusFilter::all().iter().map(|s| filter_value(*s)).collect();
        assert_eq!(values.len(), 4);
    }
}
