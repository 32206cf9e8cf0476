//! Edit session over a saved card.
//!
//! All mutations go through [`CardEditor`] so the dirty flag is always
//! current. An edit that is reverted by hand compares equal to the
//! snapshot and is reported clean again.

use chrono::{DateTime, Utc};

use super::draft::{CardDraft, CardField, FieldValue};
use super::social::{SocialLinks, SocialPlatform};
use crate::error::CardResult;

#[derive(Debug, Clone)]
pub struct CardEditor {
    draft: CardDraft,
    snapshot: CardDraft,
    dirty: bool,
    last_saved: Option<DateTime<Utc>>,
}

impl CardEditor {
    pub fn new(draft: CardDraft) -> Self {
        Self {
            snapshot: draft.clone(),
            draft,
            dirty: false,
            last_saved: None,
        }
    }

    pub fn draft(&self) -> &CardDraft {
        &self.draft
    }

    pub fn snapshot(&self) -> &CardDraft {
        &self.snapshot
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty && self.draft != self.snapshot
    }

    pub fn update_field(&mut self, field: CardField, value: impl Into<FieldValue>) -> CardResult<()> {
        self.draft.update_field(field, value)?;
        self.dirty = true;
        Ok(())
    }

    /// Apply an arbitrary change to the social link list.
    pub fn edit_social<R>(&mut self, f: impl FnOnce(&mut SocialLinks) -> R) -> R {
        self.dirty = true;
        f(&mut self.draft.social_links)
    }

    pub fn add_social_link(&mut self) -> String {
        self.edit_social(|links| links.add())
    }

    pub fn remove_social_link(&mut self, id: &str) -> bool {
        self.edit_social(|links| links.remove(id))
    }

    pub fn set_social_platform(&mut self, id: &str, platform: SocialPlatform) -> bool {
        self.edit_social(|links| links.set_platform(id, platform))
    }

    pub fn set_social_url(&mut self, id: &str, url: &str) -> bool {
        self.edit_social(|links| links.set_url(id, url))
    }

    pub fn set_avatar(&mut self, avatar: Option<super::draft::AvatarImage>) {
        self.draft.avatar = avatar;
        self.dirty = true;
    }

    /// Replace the whole draft, e.g. after loading from the API.
    pub fn replace(&mut self, draft: CardDraft) {
        *self = Self::new(draft);
    }

    /// Record a successful save of the current draft.
    pub fn mark_saved(&mut self) {
        let saved = self.draft.clone();
        self.mark_saved_as(saved);
    }

    /// Record a successful save of `saved`, the draft that was sent.
    ///
    /// Edits made while the save was in flight stay unsaved.
    pub fn mark_saved_as(&mut self, saved: CardDraft) {
        self.snapshot = saved;
        self.dirty = self.draft != self.snapshot;
        self.last_saved = Some(Utc::now());
        tracing::debug!(pending = self.dirty, "Card edits saved");
    }

    /// Drop edits and go back to the snapshot.
    pub fn discard(&mut self) {
        self.draft = self.snapshot.clone();
        self.dirty = false;
    }
}

impl Default for CardEditor {
    fn default() -> Self {
        Self::new(CardDraft::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_editor_is_clean() {
        let editor = CardEditor::default();
        assert!(!editor.has_unsaved_changes());
        assert!(editor.last_saved().is_none());
    }

    #[test]
    fn test_edit_marks_dirty() {
        let mut editor = CardEditor::default();
        editor.update_field(CardField::FirstName, "Omar").unwrap();
        assert!(editor.has_unsaved_changes());
    }

    #[test]
    fn test_revert_by_hand_is_clean() {
        let mut editor = CardEditor::default();
        editor.update_field(CardField::Company, "Acme").unwrap();
        editor.update_field(CardField::Company, "").unwrap();
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_mark_saved_and_discard() {
        let mut editor = CardEditor::default();
        editor.update_field(CardField::JobTitle, "CTO").unwrap();
        editor.mark_saved();
        assert!(!editor.has_unsaved_changes());
        assert!(editor.last_saved().is_some());

        editor.update_field(CardField::JobTitle, "CEO").unwrap();
        editor.discard();
        assert_eq!(editor.draft().job_title, "CTO");
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_edits_during_save_stay_unsaved() {
        let mut editor = CardEditor::default();
        editor.update_field(CardField::Bio, "sent").unwrap();
        let request = editor.draft().clone();

        editor.update_field(CardField::Bio, "typed while saving").unwrap();
        editor.mark_saved_as(request);

        assert_eq!(editor.snapshot().bio, "sent");
        assert_eq!(editor.draft().bio, "typed while saving");
        assert!(editor.has_unsaved_changes());
        assert!(editor.last_saved().is_some());
    }

    #[test]
    fn test_save_of_current_draft_is_clean() {
        let mut editor = CardEditor::default();
        editor.update_field(CardField::Bio, "sent").unwrap();
        let request = editor.draft().clone();
        editor.mark_saved_as(request);
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_social_edits_tracked() {
        let mut editor = CardEditor::default();
        let id = editor.add_social_link();
        assert!(editor.has_unsaved_changes());
        assert!(editor.remove_social_link(&id));
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_rejected_update_stays_clean() {
        let mut editor = CardEditor::default();
        assert!(editor.update_field(CardField::FirstName, 3.0).is_err());
        assert!(!editor.has_unsaved_changes());
    }
}
