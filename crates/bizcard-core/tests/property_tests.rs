//! Property-based tests for preferences, social links, the draft setter
//! and QR payloads.

use std::sync::Arc;

use proptest::prelude::*;

use bizcard_core::customizer::{KEY_BORDER_RADIUS, KEY_DIRECTION, KEY_LANGUAGE};
use bizcard_core::qr::{QrContent, QrOptions};
use bizcard_core::{
    CardDraft, CardField, Customizer, Direction, KeyValueStore, Language, MemoryStore, SocialLinks,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn language_strategy() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::Ar), Just(Language::En)]
}

#[derive(Debug, Clone)]
enum LinkOp {
    Add,
    Remove(usize),
}

fn link_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LinkOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(LinkOp::Add),
            1 => (0..20usize).prop_map(LinkOp::Remove),
        ],
        0..max_ops,
    )
}

fn field_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .@+/:-]{0,40}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Selecting a language stores it, and the direction is rtl iff Arabic.
    #[test]
    fn language_sets_direction(languages in prop::collection::vec(language_strategy(), 1..10)) {
        let store = Arc::new(MemoryStore::new());
        let mut customizer = Customizer::load(store.clone());
        for lang in &languages {
            customizer.set_language(*lang);
        }
        let last = *languages.last().unwrap();
        let expected = if last == Language::Ar { Direction::Rtl } else { Direction::Ltr };
        prop_assert_eq!(customizer.direction, expected);
        prop_assert_eq!(store.get(KEY_LANGUAGE).unwrap(), Some(last.code().to_string()));
        prop_assert_eq!(store.get(KEY_DIRECTION).unwrap(), Some(expected.as_str().to_string()));
    }

    /// Border radius is clamped to [4, 24] and the stored value matches.
    #[test]
    fn border_radius_clamped(value in -1000i64..1000) {
        let store = Arc::new(MemoryStore::new());
        let mut customizer = Customizer::load(store.clone());
        let applied = customizer.set_border_radius(value);
        prop_assert!((4..=24).contains(&applied));
        prop_assert_eq!(customizer.border_radius, applied);
        prop_assert_eq!(store.get(KEY_BORDER_RADIUS).unwrap(), Some(applied.to_string()));
        let reloaded = Customizer::load(store);
        prop_assert_eq!(reloaded.border_radius, applied);
    }

    /// Adds grow the list by one with a fresh id; removes drop exactly the
    /// matching entry.
    #[test]
    fn social_links_add_remove(ops in link_ops_strategy(40)) {
        let mut links = SocialLinks::new();
        for op in ops {
            match op {
                LinkOp::Add => {
                    let before: Vec<String> = links.iter().map(|l| l.id.clone()).collect();
                    let id = links.add();
                    prop_assert!(!before.contains(&id));
                    prop_assert_eq!(links.len(), before.len() + 1);
                }
                LinkOp::Remove(i) => {
                    if links.is_empty() {
                        continue;
                    }
                    let idx = i % links.len();
                    let target = links.as_slice()[idx].id.clone();
                    let expected: Vec<String> = links
                        .iter()
                        .filter(|l| l.id != target)
                        .map(|l| l.id.clone())
                        .collect();
                    prop_assert!(links.remove(&target));
                    let got: Vec<String> = links.iter().map(|l| l.id.clone()).collect();
                    prop_assert_eq!(got, expected);
                }
            }
        }
    }

    /// The bio never exceeds 200 characters.
    #[test]
    fn bio_bounded(bio in ".{0,400}") {
        let mut draft = CardDraft::default();
        draft.update_field(CardField::Bio, bio.clone()).unwrap();
        prop_assert!(draft.bio.chars().count() <= 200);
        prop_assert!(bio.starts_with(&draft.bio));
    }

    /// Phone payloads are exactly `tel:` plus the input.
    #[test]
    fn phone_payload_template(phone in "\\+?[0-9]{1,15}") {
        let content = QrContent::Phone { phone: phone.clone() };
        prop_assert_eq!(content.payload(), format!("tel:{phone}"));
    }

    /// Wi-Fi and email payloads interpolate their fields verbatim.
    #[test]
    fn templated_payloads(a in field_text_strategy(), b in field_text_strategy(), c in field_text_strategy()) {
        let email = QrContent::Email { email: a.clone(), subject: b.clone(), body: c.clone() };
        prop_assert_eq!(email.payload(), format!("mailto:{a}?subject={b}&body={c}"));
        let geo = QrContent::Location { latitude: a.clone(), longitude: b.clone() };
        prop_assert_eq!(geo.payload(), format!("geo:{a},{b}"));
    }

    /// The render URL always carries the encoded payload and the options.
    #[test]
    fn render_url_carries_options(size in 0u32..2000, margin in 0u32..100, payload in ".{1,60}") {
        let mut opts = QrOptions::default();
        opts.set_size(size);
        opts.set_margin(margin);
        let url = opts.render_url("https://qr.example/", &payload);
        let size_param = format!("size={}x{}", opts.size, opts.size);
        let data_param = format!("data={}", urlencoding::encode(&payload));
        prop_assert!(url.contains(&size_param));
        prop_assert!(url.contains(&data_param));
        prop_assert!(opts.size % 50 == 0 && (200..=800).contains(&opts.size));
        prop_assert!(opts.margin <= 20);
    }
}
