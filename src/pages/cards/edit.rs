//! Edit session for a saved card.
//!
//! Every change goes through a [`CardEditor`], which owns the dirty flag.
//! An "unsaved changes" alert offers discard; save persists through the
//! mock API and resets the snapshot.

use bizcard_core::{CardEditor, CardError};
use bizcard_ui::{Alert, Button, Notice, PillGroup, PillOption, Severity, Spinner};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{
    BasicInfoForm, CardEdit, CardPreview, ContactInfoForm, DesignPanel, PageHeader, SharingForm,
    SocialLinksEditor,
};
use crate::context::{use_api, use_cancellation, use_notice, use_translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditTab {
    Basic,
    Contact,
    Social,
    Design,
    Sharing,
}

impl EditTab {
    const ALL: [EditTab; 5] = [
        EditTab::Basic,
        EditTab::Contact,
        EditTab::Social,
        EditTab::Design,
        EditTab::Sharing,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            EditTab::Basic => "basic",
            EditTab::Contact => "contact",
            EditTab::Social => "social",
            EditTab::Design => "design",
            EditTab::Sharing => "sharing",
        }
    }

    fn label_key(&self) -> &'static str {
        match self {
            EditTab::Basic => "createCard.steps.basicInfo",
            EditTab::Contact => "createCard.steps.contactInfo",
            EditTab::Social => "createCard.steps.socialLinks",
            EditTab::Design => "createCard.steps.design",
            EditTab::Sharing => "editCard.sharing",
        }
    }

    fn parse(s: &str) -> Option<EditTab> {
        EditTab::ALL.into_iter().find(|tab| tab.as_str() == s)
    }
}

#[component]
pub fn EditCard(id: String) -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let mut notice = use_notice();

    let mut editor = use_signal(|| Option::<CardEditor>::None);
    let mut load_error = use_signal(|| Option::<&'static str>::None);
    let mut saving = use_signal(|| false);
    let mut tab = use_signal(|| EditTab::Basic);

    use_hook({
        let api = api.clone();
        let cancel = cancel.clone();
        let id = id.clone();
        move || {
            spawn(async move {
                match api.load_card(&id, &cancel).await {
                    Ok(card) => editor.set(Some(CardEditor::new(card.draft))),
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

    let Some(session) = editor.read().clone() else {
        return rsx! {
            Spinner { label: t.t("common.loading") }
        };
    };

    let on_edit = move |edit: CardEdit| {
        if let Some(ed) = editor.write().as_mut() {
            if let Err(e) = edit.apply_to_editor(ed) {
                tracing::warn!("Rejected card edit: {}", e);
            }
        }
    };

    let save = {
        let id = id.clone();
        move |_| {
            let Some(draft) = editor.read().as_ref().map(|ed| ed.draft().clone()) else {
                return;
            };
            saving.set(true);
            let api = api.clone();
            let cancel = cancel.clone();
            let id = id.clone();
            spawn(async move {
                match api.update_card(&id, draft, &cancel).await {
                    Ok(saved) => {
                        if let Some(ed) = editor.write().as_mut() {
                            ed.mark_saved_as(saved.draft);
                        }
                        notice.set(Some(Notice::success(t.t("editCard.saved"))));
                    }
                    Err(e) => {
                        if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                            notice.set(Some(n));
                        }
                    }
                }
                saving.set(false);
            });
        }
    };

    let draft = session.draft().clone();
    let dirty = session.has_unsaved_changes();
    let last_saved = session.last_saved().map(|at| {
        at.with_timezone(&chrono::Local).format("%H:%M").to_string()
    });
    let tab_options: Vec<PillOption> = EditTab::ALL
        .iter()
        .map(|tab| PillOption::new(tab.as_str(), t.t(tab.label_key())))
        .collect();
    let current_tab = tab();

    rsx! {
        PageHeader { title: t.t("editCard.title"), subtitle: draft.full_name(),
            Link {
                class: "btn btn-outlined",
                to: Route::PreviewCard { id: id.clone() },
                {t.t("editCard.preview")}
            }
            Button { loading: saving(), disabled: !dirty, onclick: save, {t.t("common.save")} }
        }
        if dirty {
            Alert { severity: Severity::Warning,
                {t.t("editCard.unsavedChanges")}
                " "
                button {
                    class: "btn btn-text",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(ed) = editor.write().as_mut() {
                            ed.discard();
                            tracing::debug!("Discarded unsaved card edits");
                        }
                    },
                    {t.t("editCard.discard")}
                }
            }
        } else if let Some(at) = last_saved {
            p { class: "text-secondary last-saved", {t.t_with("editCard.lastSaved", &[("time", at.as_str())])} }
        }
        div { class: "editor-layout",
            div { class: "card editor-main",
                PillGroup {
                    options: tab_options,
                    selected: current_tab.as_str().to_string(),
                    on_select: move |v: String| {
                        if let Some(next) = EditTab::parse(&v) {
                            tab.set(next);
                        }
                    },
                }
                {
                    match current_tab {
                        EditTab::Basic => rsx! {
                            BasicInfoForm { draft: draft.clone(), on_edit }
                        },
                        EditTab::Contact => rsx! {
                            ContactInfoForm { draft: draft.clone(), on_edit }
                        },
                        EditTab::Social => rsx! {
                            SocialLinksEditor { links: draft.social_links.clone(), on_edit }
                        },
                        EditTab::Design => rsx! {
                            DesignPanel { draft: draft.clone(), on_edit }
                        },
                        EditTab::Sharing => rsx! {
                            SharingForm { draft: draft.clone(), on_edit }
                        },
                    }
                }
            }
            aside { class: "editor-preview",
                h4 { {t.t("preview.title")} }
                CardPreview { draft: draft.clone(), scale: 0.9 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parse() {
        for tab in EditTab::ALL {
            assert_eq!(EditTab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(EditTab::parse("nope"), None);
    }
}
