//! Card form sections shared by the creation wizard and the edit page.
//!
//! Sections never own the draft. They render from a `CardDraft` value and
//! report every change as a [`CardEdit`]; the page applies it to its own
//! state (a plain draft in the wizard, a [`CardEditor`] on the edit page).

use bizcard_core::card::validation::BIO_MAX_CHARS;
use bizcard_core::card::{AvatarImage, FieldIssue};
use bizcard_core::{
    CardDraft, CardEditor, CardField, CardResult, FieldValue, SocialLinks, SocialPlatform,
};
use bizcard_ui::{Input, TextArea};
use dioxus::prelude::*;

use crate::components::AvatarUpload;
use crate::context::use_translator;

/// Change to a social link entry.
#[derive(Debug, Clone, PartialEq)]
pub enum SocialEdit {
    Add,
    Remove(String),
    Platform(String, SocialPlatform),
    Url(String, String),
}

impl SocialEdit {
    pub fn apply(self, links: &mut SocialLinks) {
        match self {
            SocialEdit::Add => {
                links.add();
            }
            SocialEdit::Remove(id) => {
                links.remove(&id);
            }
            SocialEdit::Platform(id, platform) => {
                links.set_platform(&id, platform);
            }
            SocialEdit::Url(id, url) => {
                links.set_url(&id, url);
            }
        }
    }
}

/// One change emitted by a form section.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEdit {
    Field(CardField, FieldValue),
    Social(SocialEdit),
    Avatar(Option<AvatarImage>),
}

impl CardEdit {
    pub fn text(field: CardField, value: String) -> Self {
        CardEdit::Field(field, FieldValue::Text(value))
    }

    pub fn apply_to_draft(self, draft: &mut CardDraft) -> CardResult<()> {
        match self {
            CardEdit::Field(field, value) => draft.update_field(field, value)?,
            CardEdit::Social(edit) => edit.apply(&mut draft.social_links),
            CardEdit::Avatar(avatar) => draft.avatar = avatar,
        }
        Ok(())
    }

    pub fn apply_to_editor(self, editor: &mut CardEditor) -> CardResult<()> {
        match self {
            CardEdit::Field(field, value) => editor.update_field(field, value)?,
            CardEdit::Social(edit) => editor.edit_social(|links| edit.apply(links)),
            CardEdit::Avatar(avatar) => editor.set_avatar(avatar),
        }
        Ok(())
    }
}

/// Translated message of the first issue on `field`.
fn issue_for(issues: &[FieldIssue], field: CardField, t: &bizcard_core::Translator) -> Option<String> {
    issues.iter().find(|i| i.field == field).map(|i| t.t(i.message_key))
}

#[component]
pub fn BasicInfoForm(
    draft: CardDraft,
    #[props(default)] issues: Vec<FieldIssue>,
    on_edit: EventHandler<CardEdit>,
) -> Element {
    let t = use_translator();

    rsx! {
        div { class: "form-section",
            AvatarUpload {
                current: draft.avatar.clone(),
                initials: draft.initials(),
                on_change: move |avatar| on_edit.call(CardEdit::Avatar(avatar)),
            }
            div { class: "form-grid",
                Input {
                    label: t.t("basicInfo.firstName"),
                    value: draft.first_name.clone(),
                    required: true,
                    error: issue_for(&issues, CardField::FirstName, &t),
                    oninput: move |v| on_edit.call(CardEdit::text(CardField::FirstName, v)),
                }
                Input {
                    label: t.t("basicInfo.lastName"),
                    value: draft.last_name.clone(),
                    required: true,
                    error: issue_for(&issues, CardField::LastName, &t),
                    oninput: move |v| on_edit.call(CardEdit::text(CardField::LastName, v)),
                }
                Input {
                    label: t.t("basicInfo.jobTitle"),
                    value: draft.job_title.clone(),
                    required: true,
                    error: issue_for(&issues, CardField::JobTitle, &t),
                    oninput: move |v| on_edit.call(CardEdit::text(CardField::JobTitle, v)),
                }
                Input {
                    label: t.t("basicInfo.company"),
                    value: draft.company.clone(),
                    required: true,
                    error: issue_for(&issues, CardField::Company, &t),
                    oninput: move |v| on_edit.call(CardEdit::text(CardField::Company, v)),
                }
            }
            TextArea {
                label: t.t("basicInfo.bio"),
                placeholder: t.t("basicInfo.bioPlaceholder"),
                value: draft.bio.clone(),
                max_chars: BIO_MAX_CHARS,
                error: issue_for(&issues, CardField::Bio, &t),
                oninput: move |v| on_edit.call(CardEdit::text(CardField::Bio, v)),
            }
        }
    }
}

#[component]
pub fn ContactInfoForm(
    draft: CardDraft,
    #[props(default)] issues: Vec<FieldIssue>,
    on_edit: EventHandler<CardEdit>,
) -> Element {
    let t = use_translator();
    let c = draft.contact.clone();

    rsx! {
        div { class: "form-section",
            div { class: "form-grid",
                Input {
                    label: t.t("contactInfo.email"),
                    input_type: "email".to_string(),
                    icon: "\u{2709}".to_string(),
                    placeholder: "name@company.com".to_string(),
                    value: c.email,
                    error: issue_for(&issues, CardField::Email, &t),
                    oninput: move |v| on_edit.call(CardEdit::text(CardField::Email, v)),
                }
                Input {
                    label: t.t("contactInfo.phone"),
                    input_type: "tel".to_string(),
                    icon: "\u{260E}".to_string(),
                    placeholder: "+966 50 123 4567".to_string(),
                    value: c.phone,
                    error: issue_for(&issues, CardField::Phone, &t),
                    oninput: move |v| on_edit.call(CardEdit::text(CardField::Phone, v)),
                }
                Input {
                    label: t.t("contactInfo.website"),
                    input_type: "url".to_string(),
                    icon: "\u{1F310}".to_string(),
                    placeholder: "https://".to_string(),
                    value: c.website,
                    error: issue_for(&issues, CardField::Website, &t),
                    oninput: move |v| on_edit.call(CardEdit::text(CardField::Website, v)),
                }
            }
            TextArea {
                label: t.t("contactInfo.address"),
                value: c.address,
                rows: 2,
                oninput: move |v| on_edit.call(CardEdit::text(CardField::Address, v)),
            }
        }
    }
}

/// Visibility toggles shown on the edit page.
#[component]
pub fn SharingForm(draft: CardDraft, on_edit: EventHandler<CardEdit>) -> Element {
    let t = use_translator();
    let s = draft.sharing.clone();

    rsx! {
        div { class: "form-section",
            bizcard_ui::Switch {
                label: t.t("editCard.isPublic"),
                description: t.t("editCard.isPublicDesc"),
                checked: s.is_public,
                onchange: move |on: bool| on_edit.call(CardEdit::Field(CardField::IsPublic, on.into())),
            }
            bizcard_ui::Switch {
                label: t.t("editCard.allowDownload"),
                checked: s.allow_download,
                onchange: move |on: bool| on_edit.call(CardEdit::Field(CardField::AllowDownload, on.into())),
            }
            bizcard_ui::Switch {
                label: t.t("editCard.showQr"),
                checked: s.show_qr,
                onchange: move |on: bool| on_edit.call(CardEdit::Field(CardField::ShowQr, on.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_edits_apply_in_order() {
        let mut draft = CardDraft::default();
        CardEdit::Social(SocialEdit::Add).apply_to_draft(&mut draft).unwrap();
        let id = draft.social_links.as_slice()[0].id.clone();

        CardEdit::Social(SocialEdit::Platform(id.clone(), SocialPlatform::GitHub))
            .apply_to_draft(&mut draft)
            .unwrap();
        CardEdit::Social(SocialEdit::Url(id.clone(), "https://github.com/lina".into()))
            .apply_to_draft(&mut draft)
            .unwrap();

        let link = draft.social_links.get(&id).unwrap();
        assert_eq!(link.platform, SocialPlatform::GitHub);
        assert_eq!(link.url, "https://github.com/lina");

        CardEdit::Social(SocialEdit::Remove(id)).apply_to_draft(&mut draft).unwrap();
        assert!(draft.social_links.is_empty());
    }

    #[test]
    fn test_editor_tracks_dirty_state() {
        let mut editor = CardEditor::new(CardDraft::default());
        CardEdit::text(CardField::Company, "Acme".into())
            .apply_to_editor(&mut editor)
            .unwrap();
        assert!(editor.has_unsaved_changes());

        CardEdit::text(CardField::Company, String::new())
            .apply_to_editor(&mut editor)
            .unwrap();
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_bad_template_value_is_rejected() {
        let mut draft = CardDraft::default();
        let result = CardEdit::text(CardField::Template, "neon".into()).apply_to_draft(&mut draft);
        assert!(result.is_err());
    }
}
