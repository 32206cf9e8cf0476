//! End-to-end flows across the preference store, the card wizard, the
//! edit session and the mock API.

use std::sync::Arc;
use std::time::Duration;

use bizcard_core::auth::VerificationStatus;
use bizcard_core::card::{Advance, AdvancePolicy, PreviewModel};
use bizcard_core::config::ApiDelays;
use bizcard_core::customizer::KEY_LANGUAGE;
use bizcard_core::qr::{QrField, QrForm, QrKind, WifiSecurity};
use bizcard_core::{
    CardEditor, CardError, CardField, ColorMode, Customizer, CustomizerAction, Direction,
    KeyValueStore, Language, MemoryStore, MockApi, RedbStore, SocialPlatform, TaskHandle,
    ThemeName, Translator, Wizard, WizardStep,
};
use tempfile::tempdir;
use tokio_util::sync::CancellationToken;

/// Fresh load with empty storage uses the Arabic, RTL, blue defaults.
#[test]
fn test_fresh_load_defaults() {
    let mut customizer = Customizer::load(Arc::new(MemoryStore::new()));
    let root = customizer.dispatch(CustomizerAction::Initialize).unwrap();
    assert_eq!(customizer.language, Language::Ar);
    assert_eq!(customizer.direction, Direction::Rtl);
    assert_eq!(customizer.theme, ThemeName::Blue);
    assert_eq!(root.dir, Direction::Rtl);
}

/// Switching to English survives a restart on the redb store.
#[test]
fn test_language_persists_across_restart() {
    let dir = tempdir().unwrap();
    {
        let store = Arc::new(RedbStore::open_in(dir.path()).unwrap());
        let mut customizer = Customizer::load(store);
        customizer.dispatch(CustomizerAction::SetLanguage(Language::En));
        customizer.dispatch(CustomizerAction::SetMode(ColorMode::Dark));
        customizer.dispatch(CustomizerAction::SetTheme(ThemeName::Purple));
    }
    let store = Arc::new(RedbStore::open_in(dir.path()).unwrap());
    assert_eq!(store.get(KEY_LANGUAGE).unwrap().as_deref(), Some("en"));
    let customizer = Customizer::load(store);
    assert_eq!(customizer.language, Language::En);
    assert_eq!(customizer.direction, Direction::Ltr);
    assert_eq!(customizer.mode, ColorMode::Dark);
    assert_eq!(customizer.theme, ThemeName::Purple);
}

/// Malformed stored values fall back to defaults.
#[test]
fn test_malformed_preferences_fall_back() {
    let store = Arc::new(MemoryStore::with_entries([
        ("activeMode", "sepia"),
        ("borderRadius", "abc"),
        ("language", "fr"),
    ]));
    let customizer = Customizer::load(store);
    assert_eq!(customizer.mode, ColorMode::Light);
    assert_eq!(customizer.border_radius, 7);
    assert_eq!(customizer.language, Language::Ar);
}

/// Walk the wizard with the lenient policy and create the card.
#[tokio::test]
async fn test_create_card_through_wizard() {
    let api = MockApi::instant();
    let mut editor = CardEditor::default();
    let mut wizard = Wizard::new(AdvancePolicy::Lenient);

    editor.update_field(CardField::FirstName, "Sara").unwrap();
    editor.update_field(CardField::LastName, "Ali").unwrap();
    editor.update_field(CardField::JobTitle, "Designer").unwrap();
    editor.update_field(CardField::Company, "Studio").unwrap();
    assert_eq!(wizard.next(editor.draft()), Advance::Moved(WizardStep::ContactInfo));

    editor.update_field(CardField::Email, "sara@studio.io").unwrap();
    wizard.next(editor.draft());

    let id = editor.add_social_link();
    editor.set_social_platform(&id, SocialPlatform::Instagram);
    editor.set_social_url(&id, "https://instagram.com/sara");
    wizard.next(editor.draft());

    editor.update_field(CardField::Template, "creative").unwrap();
    assert_eq!(wizard.next(editor.draft()), Advance::Moved(WizardStep::Preview));
    assert_eq!(wizard.progress_percent(), 100);

    Wizard::can_create(editor.draft()).unwrap();
    let saved = api
        .save_card(editor.draft().clone(), &CancellationToken::new())
        .await
        .unwrap();
    editor.mark_saved();
    assert!(!editor.has_unsaved_changes());

    let preview = PreviewModel::from_draft(&saved.draft, 1.0);
    assert_eq!(preview.name.as_deref(), Some("Sara Ali"));
    assert_eq!(preview.socials.len(), 1);
}

/// Editing a loaded card tracks unsaved changes and discard restores it.
#[tokio::test]
async fn test_edit_discard_and_save() {
    let api = MockApi::instant();
    let token = CancellationToken::new();
    let card = api.load_card("7", &token).await.unwrap();
    let mut editor = CardEditor::new(card.draft.clone());

    editor.update_field(CardField::JobTitle, "CTO").unwrap();
    assert!(editor.has_unsaved_changes());
    editor.discard();
    assert_eq!(editor.draft(), &card.draft);

    editor.update_field(CardField::JobTitle, "CTO").unwrap();
    let updated = api.update_card("7", editor.draft().clone(), &token).await.unwrap();
    editor.mark_saved();
    assert_eq!(updated.draft.job_title, "CTO");
    assert_eq!(api.load_card("7", &token).await.unwrap().draft.job_title, "CTO");
}

/// Dropping a pending save (leaving the page) never completes it.
#[tokio::test(start_paused = true)]
async fn test_unmount_cancels_save() {
    let api = MockApi::new(ApiDelays::default());
    let task_api = api.clone();
    let handle = TaskHandle::spawn(move |token| async move {
        task_api
            .save_card(bizcard_core::CardDraft::default(), &token)
            .await
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    drop(handle);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(api
        .list_cards(&CancellationToken::new())
        .await
        .unwrap()
        .is_empty());
}

/// Verify-email page: no token stays pending, a token resolves.
#[tokio::test]
async fn test_verify_email_flow() {
    let api = MockApi::instant();
    let token = CancellationToken::new();

    let status = VerificationStatus::default();
    assert_eq!(status, VerificationStatus::Pending);

    let status = status.start();
    let result = api.verify_email("tok-123", &token).await;
    assert_eq!(status.resolve(&result), VerificationStatus::Success);

    let status = VerificationStatus::Pending.start();
    let result = api.verify_email("", &token).await;
    assert!(matches!(result, Err(CardError::InvalidToken)));
    assert_eq!(status.resolve(&result), VerificationStatus::Error);
}

/// QR generator: Wi-Fi form produces the exact payload and image URL.
#[test]
fn test_qr_wifi_flow() {
    let mut form = QrForm::new(QrKind::Wifi);
    form.set(QrField::Ssid, "Office").unwrap();
    form.set(QrField::Password, "p@ss").unwrap();
    form.security = WifiSecurity::Wep;
    let payload = form.renderable_payload().unwrap();
    assert_eq!(payload, "WIFI:T:WEP;S:Office;P:p@ss;;");
    let url = bizcard_core::QrOptions::default().render_url("https://qr.example/", &payload);
    assert!(url.contains("data=WIFI%3AT%3AWEP%3BS%3AOffice%3BP%3Ap%40ss%3B%3B"));
}

/// Validation messages resolve in both languages.
#[test]
fn test_issue_messages_translate() {
    let issues = bizcard_core::card::validate_draft(&bizcard_core::CardDraft::default());
    assert!(!issues.is_empty());
    for lang in Language::all() {
        let t = Translator::new(*lang);
        for issue in &issues {
            assert!(t.has(issue.message_key), "{} missing {}", lang, issue.message_key);
        }
    }
}
