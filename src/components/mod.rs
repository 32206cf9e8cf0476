//! Desktop components built on the shared UI kit.

mod avatar_upload;
mod card_form;
mod card_preview;
mod customizer_panel;
mod design_panel;
mod header;
mod page_header;
mod qr_code;
mod share_dialog;
mod sidebar;
mod social_links_editor;

pub use avatar_upload::AvatarUpload;
pub use card_form::{BasicInfoForm, CardEdit, ContactInfoForm, SharingForm, SocialEdit};
pub use card_preview::CardPreview;
pub use customizer_panel::CustomizerPanel;
pub use design_panel::{DesignPanel, TemplatePicker};
pub use header::{Header, LanguageSwitcher, ModeToggle};
pub use page_header::PageHeader;
pub use qr_code::{render_svg, QrCodeView};
pub use share_dialog::{copy_to_clipboard, CopyField, ShareDialog};
pub use sidebar::Sidebar;
pub use social_links_editor::SocialLinksEditor;
