//! Business card model: draft, wizard, edit session, and preview.

mod draft;
mod editor;
pub mod preview;
mod social;
mod template;
pub mod validation;
mod vcard;
mod wizard;

pub use draft::{
    clamp_opacity, snap_card_radius, AvatarImage, CardDraft, CardField, CardStatus, ContactInfo,
    DesignSettings, FieldValue, SavedCard, SharingSettings, FONT_SIZE_RANGE,
};
pub use editor::CardEditor;
pub use preview::{ContactKind, ContactRow, PreviewModel, SocialRow};
pub use social::{SocialLink, SocialLinks, SocialPlatform};
pub use template::{FontFamily, TemplateCategory, TemplateId};
pub use validation::{validate_draft, FieldIssue};
pub use vcard::{to_vcard, vcard_file_name};
pub use wizard::{Advance, AdvancePolicy, Wizard, WizardStep};
