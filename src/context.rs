//! Application context for BizCard.
//!
//! The root component provides the preference store, the translator, the
//! mock API, the config and a few UI-wide signals. Views reach them through
//! the `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let t = use_translator();
//! let mut customizer = use_customizer();
//!
//! rsx! {
//!     button {
//!         onclick: move |_| dispatch(&mut customizer, CustomizerAction::SetLanguage(Language::En)),
//!         "{t.t(\"common.english\")}"
//!     }
//! }
//! ```

use std::path::PathBuf;

use bizcard_core::auth::Session;
use bizcard_core::{AppConfig, Customizer, CustomizerAction, DocumentRoot, MockApi, Translator};
use bizcard_ui::Notice;
use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the preference store.
pub fn use_customizer() -> Signal<Customizer> {
    use_context::<Signal<Customizer>>()
}

/// Translator for the active language. Reading it subscribes the caller to
/// language changes.
pub fn use_translator() -> Translator {
    let t = use_context::<Memo<Translator>>();
    t()
}

pub fn use_api() -> MockApi {
    use_context::<MockApi>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Signed-in session, `None` until login or registration succeeds.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// App-wide snackbar message.
pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

/// Customizer drawer open state.
#[derive(Clone, Copy)]
pub struct CustomizerOpen(pub Signal<bool>);

pub fn use_customizer_open() -> Signal<bool> {
    use_context::<CustomizerOpen>().0
}

/// A token cancelled when the calling component unmounts. Pass it to every
/// mock API call so a late result never reaches a view that is gone.
pub fn use_cancellation() -> CancellationToken {
    let token = use_hook(CancellationToken::new);
    let on_drop = token.clone();
    use_drop(move || on_drop.cancel());
    token
}

/// Apply an action to the preference store and reflect `dir`/`lang` onto
/// the document root when it returns them.
pub fn dispatch(customizer: &mut Signal<Customizer>, action: CustomizerAction) {
    let root = customizer.write().dispatch(action);
    if let Some(root) = root {
        apply_document_root(root);
    }
}

/// Set `dir` and `lang` on `<html>`.
pub fn apply_document_root(root: DocumentRoot) {
    let js = format!(
        "document.documentElement.setAttribute('dir', '{}'); document.documentElement.setAttribute('lang', '{}');",
        root.dir.as_str(),
        root.lang.code()
    );
    let _ = document::eval(&js);
    tracing::debug!(dir = %root.dir, lang = %root.lang, "Applied document root");
}
