use std::sync::Arc;

use bizcard_core::auth::Session;
use bizcard_core::{Customizer, KeyValueStore, MemoryStore, MockApi, RedbStore, Translator};
use bizcard_ui::{Notice, Snackbar};
use dioxus::prelude::*;

use crate::context::{apply_document_root, get_data_dir, CustomizerOpen};
use crate::layouts::{DashboardLayout, PublicLayout};
use crate::pages::{
    Analytics, ComingSoon, CreateCard, DashboardHome, EditCard, ForgotPassword, Home, Login,
    MyCards, NotFound, PreviewCard, Profile, PublicCard, QrGenerator, Register, ResetPassword,
    Settings, ShortCard, Templates, VerifyEmail,
};
use crate::theme::{theme_variables, GLOBAL_STYLES};

/// Application routes.
///
/// Public pages share the bare layout; everything under `/dashboard` gets
/// the sidebar and header. Unknown dashboard sections render a "coming
/// soon" page when they are menu placeholders and the not-found page
/// otherwise.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[nest("/auth")]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
            #[route("/forgot-password")]
            ForgotPassword {},
            #[route("/reset-password?:token")]
            ResetPassword { token: String },
            #[route("/verify-email?:token")]
            VerifyEmail { token: String },
        #[end_nest]
        #[route("/card/:username")]
        PublicCard { username: String },
        #[route("/c/:card_id")]
        ShortCard { card_id: String },
    #[end_layout]

    #[nest("/dashboard")]
        #[redirect("/", || Route::DashboardHome {})]
        #[layout(DashboardLayout)]
            #[route("/home")]
            DashboardHome {},
            #[route("/analytics")]
            Analytics {},
            #[route("/cards")]
            MyCards {},
            #[route("/cards/create?:template")]
            CreateCard { template: String },
            #[route("/cards/edit/:id")]
            EditCard { id: String },
            #[route("/cards/preview/:id")]
            PreviewCard { id: String },
            #[route("/cards/templates")]
            Templates {},
            #[route("/qr")]
            QrGenerator {},
            #[route("/profile")]
            Profile {},
            #[route("/settings")]
            Settings {},
            #[route("/:section")]
            ComingSoon { section: String },
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Open the preference database, falling back to memory so the app still
/// starts when the file is locked or unreadable.
fn open_store() -> Arc<dyn KeyValueStore> {
    let data_dir = get_data_dir();
    match RedbStore::open_in(&data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                data_dir = %data_dir.display(),
                "Preferences will not persist, store unavailable: {}",
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

/// Root application component.
///
/// Provides global styles, the preference store, translator, mock API and
/// routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(crate::get_config);
    let api = use_hook({
        let delays = config.api.clone();
        move || MockApi::new(delays)
    });

    let mut customizer: Signal<Customizer> = use_signal(|| Customizer::load(open_store()));
    let translator = use_memo(move || Translator::new(customizer.read().language));
    let session: Signal<Option<Session>> = use_signal(|| None);
    let notice: Signal<Option<Notice>> = use_signal(|| None);
    let drawer_open = use_signal(|| false);

    use_context_provider(|| config.clone());
    use_context_provider(|| api.clone());
    use_context_provider(|| customizer);
    use_context_provider(|| translator);
    use_context_provider(|| session);
    use_context_provider(|| notice);
    use_context_provider(|| CustomizerOpen(drawer_open));

    // Reflect the stored language and direction once the webview is up
    use_effect(move || {
        let root = customizer.write().initialize();
        apply_document_root(root);
        tracing::info!(lang = %root.lang, dir = %root.dir, "Preferences initialized");
    });

    let variables = theme_variables(&customizer.read());

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {variables} }
        Router::<Route> {}
        Snackbar { notice }
    }
}
