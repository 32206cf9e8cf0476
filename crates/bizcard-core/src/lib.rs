//! BizCard Core Library
//!
//! Presentation state and domain logic for the BizCard digital business
//! card application. The desktop shell (Dioxus) and the CLI are thin
//! wrappers around this crate.
//!
//! ## Overview
//!
//! - **Customizer**: global presentation preferences (theme, color mode,
//!   language, direction, sidebar layout) persisted through a
//!   [`KeyValueStore`] port.
//! - **Cards**: the card draft edited by the creation wizard and the edit
//!   session, social links, validation, templates and the preview model.
//! - **QR**: per-type payload templates and the render request sent to the
//!   public QR image endpoint.
//! - **Mock API**: delayed, cancelable stand-ins for the backend calls.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bizcard_core::{Customizer, Language, MemoryStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut customizer = Customizer::load(store);
//! customizer.set_language(Language::En);
//! assert_eq!(customizer.direction, bizcard_core::Direction::Ltr);
//! ```

pub mod api;
pub mod auth;
pub mod card;
pub mod config;
pub mod customizer;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod nav;
pub mod qr;
pub mod storage;
pub mod task;

// Re-exports
pub use api::MockApi;
pub use card::{
    CardDraft, CardEditor, CardField, CardStatus, FieldValue, PreviewModel, SavedCard,
    SocialLink, SocialLinks, SocialPlatform, TemplateId, Wizard, WizardStep,
};
pub use config::AppConfig;
pub use customizer::{
    ColorMode, Customizer, CustomizerAction, Direction, DocumentRoot, LayoutMode, ThemeName,
};
pub use error::{CardError, CardResult};
pub use i18n::{Language, Translator};
pub use qr::{QrContent, QrForm, QrKind, QrOptions};
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use task::TaskHandle;
