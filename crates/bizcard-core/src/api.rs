//! Mock backend.
//!
//! Every call waits for a configured delay and then succeeds, except for
//! the few inputs that model a missing card or a bad token. Cards saved in
//! a session are kept in memory so edits survive navigation. Each call
//! takes a [`CancellationToken`] and returns `Cancelled` if the caller
//! goes away first.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::auth::{Session, UserProfile};
use crate::card::{CardDraft, CardStatus, SavedCard, SocialLink, SocialLinks, SocialPlatform};
use crate::config::ApiDelays;
use crate::error::{CardError, CardResult};
use crate::task::delay;

/// Lookup key that always misses, for exercising the not-found page.
pub const MISSING_CARD_KEY: &str = "missing";

/// A card as seen on its public page.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicCard {
    pub username: String,
    pub card: SavedCard,
    pub likes: u32,
}

#[derive(Clone)]
pub struct MockApi {
    delays: ApiDelays,
    cards: Arc<RwLock<HashMap<String, SavedCard>>>,
    profile: Arc<RwLock<UserProfile>>,
}

impl std::fmt::Debug for MockApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockApi")
            .field("delays", &self.delays)
            .field("cards", &self.cards.read().len())
            .finish()
    }
}

/// The sample card shown for ids the session has not saved.
pub fn sample_card(id: &str) -> SavedCard {
    let mut draft = CardDraft::default();
    draft.first_name = "Ahmed".to_string();
    draft.last_name = "Mohammed".to_string();
    draft.job_title = "Senior App Developer".to_string();
    draft.company = "Advanced Tech Co.".to_string();
    draft.bio = "App developer with 5 years of experience building mobile and web products."
        .to_string();
    draft.contact.email = "ahmed.mohammed@techcompany.com".to_string();
    draft.contact.phone = "+966501234567".to_string();
    draft.contact.website = "https://ahmed-dev.com".to_string();
    draft.contact.address = "Riyadh, Saudi Arabia".to_string();
    draft.social_links = SocialLinks::from_links(
        [
            (SocialPlatform::LinkedIn, "https://linkedin.com/in/ahmed-mohammed"),
            (SocialPlatform::Twitter, "https://twitter.com/ahmed_dev"),
            (SocialPlatform::GitHub, "https://github.com/ahmed-mohammed"),
            (SocialPlatform::Instagram, "https://instagram.com/ahmed_dev"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (platform, url))| SocialLink {
            id: (i + 1).to_string(),
            platform,
            url: url.to_string(),
        })
        .collect(),
    );
    draft.design.primary_color = "#1976d2".to_string();

    let mut card = SavedCard::create(draft);
    card.id = id.to_string();
    card.views = 1_234;
    card.shares = 89;
    card
}

impl MockApi {
    pub fn new(delays: ApiDelays) -> Self {
        Self {
            delays,
            cards: Arc::new(RwLock::new(HashMap::new())),
            profile: Arc::new(RwLock::new(UserProfile::default())),
        }
    }

    /// Zero-latency instance for tests and the CLI.
    pub fn instant() -> Self {
        Self::new(ApiDelays::instant())
    }

    pub fn delays(&self) -> &ApiDelays {
        &self.delays
    }

    async fn wait(&self, token: &CancellationToken, duration: Duration) -> CardResult<()> {
        if duration.is_zero() {
            return if token.is_cancelled() {
                Err(CardError::Cancelled)
            } else {
                Ok(())
            };
        }
        delay(token, duration).await
    }

    // ----- Cards -----

    pub async fn load_card(&self, id: &str, token: &CancellationToken) -> CardResult<SavedCard> {
        self.wait(token, self.delays.load()).await?;
        if id.trim().is_empty() || id == MISSING_CARD_KEY {
            return Err(CardError::CardNotFound(id.to_string()));
        }
        let card = self
            .cards
            .read()
            .get(id)
            .cloned()
            .unwrap_or_else(|| sample_card(id));
        debug!(id = %id, "Loaded card");
        Ok(card)
    }

    /// Store a new card. Always succeeds.
    pub async fn save_card(&self, draft: CardDraft, token: &CancellationToken) -> CardResult<SavedCard> {
        self.wait(token, self.delays.save()).await?;
        let card = SavedCard::create(draft);
        self.cards.write().insert(card.id.clone(), card.clone());
        info!(id = %card.id, "Card created");
        Ok(card)
    }

    pub async fn update_card(
        &self,
        id: &str,
        draft: CardDraft,
        token: &CancellationToken,
    ) -> CardResult<SavedCard> {
        self.wait(token, self.delays.save()).await?;
        if id.trim().is_empty() || id == MISSING_CARD_KEY {
            return Err(CardError::CardNotFound(id.to_string()));
        }
        let mut cards = self.cards.write();
        let card = cards.entry(id.to_string()).or_insert_with(|| sample_card(id));
        card.draft = draft;
        card.touch();
        info!(id = %id, "Card updated");
        Ok(card.clone())
    }

    pub async fn delete_card(&self, id: &str, token: &CancellationToken) -> CardResult<()> {
        self.wait(token, self.delays.load()).await?;
        self.cards.write().remove(id);
        info!(id = %id, "Card deleted");
        Ok(())
    }

    /// Cards saved in this session, newest first.
    pub async fn list_cards(&self, token: &CancellationToken) -> CardResult<Vec<SavedCard>> {
        self.wait(token, self.delays.load()).await?;
        let mut cards: Vec<SavedCard> = self.cards.read().values().cloned().collect();
        cards.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(cards)
    }

    pub async fn set_status(
        &self,
        id: &str,
        status: CardStatus,
        token: &CancellationToken,
    ) -> CardResult<SavedCard> {
        self.wait(token, self.delays.save()).await?;
        let mut cards = self.cards.write();
        let card = cards
            .get_mut(id)
            .ok_or_else(|| CardError::CardNotFound(id.to_string()))?;
        card.status = status;
        card.touch();
        Ok(card.clone())
    }

    // ----- Public page -----

    /// Look up a card by owner username or card id.
    pub async fn load_public_card(&self, key: &str, token: &CancellationToken) -> CardResult<PublicCard> {
        self.wait(token, self.delays.load()).await?;
        let key = key.trim();
        if key.is_empty() || key == MISSING_CARD_KEY {
            return Err(CardError::CardNotFound(key.to_string()));
        }
        let card = self
            .cards
            .read()
            .get(key)
            .cloned()
            .unwrap_or_else(|| sample_card(key));
        if !card.draft.sharing.is_public {
            return Err(CardError::CardNotFound(key.to_string()));
        }
        Ok(PublicCard {
            username: key.to_string(),
            card,
            likes: 89,
        })
    }

    /// Count a view. Returns the new view count.
    pub async fn track_view(&self, card: &mut PublicCard, token: &CancellationToken) -> CardResult<u32> {
        self.wait(token, Duration::ZERO).await?;
        card.card.views = card.card.views.saturating_add(1);
        if let Some(stored) = self.cards.write().get_mut(&card.card.id) {
            stored.views = card.card.views;
        }
        Ok(card.card.views)
    }

    /// Toggle a like. Returns the new like count.
    pub async fn like_card(
        &self,
        card: &mut PublicCard,
        liked: bool,
        token: &CancellationToken,
    ) -> CardResult<u32> {
        self.wait(token, Duration::ZERO).await?;
        card.likes = if liked {
            card.likes.saturating_add(1)
        } else {
            card.likes.saturating_sub(1)
        };
        Ok(card.likes)
    }

    // ----- Account -----

    pub async fn login(&self, email: &str, _password: &str, token: &CancellationToken) -> CardResult<Session> {
        self.wait(token, self.delays.auth()).await?;
        let mut user = self.profile.read().clone();
        user.email = email.trim().to_string();
        info!(email = %user.email, "Signed in");
        Ok(Session {
            token: ulid::Ulid::new().to_string(),
            user,
        })
    }

    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        token: &CancellationToken,
    ) -> CardResult<UserProfile> {
        self.wait(token, self.delays.auth()).await?;
        let mut profile = self.profile.write();
        profile.first_name = first_name.trim().to_string();
        profile.last_name = last_name.trim().to_string();
        profile.email = email.trim().to_string();
        profile.username = email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        info!(email = %profile.email, "Account registered");
        Ok(profile.clone())
    }

    pub async fn request_password_reset(&self, email: &str, token: &CancellationToken) -> CardResult<()> {
        self.wait(token, self.delays.auth()).await?;
        info!(email = %email.trim(), "Password reset link sent");
        Ok(())
    }

    pub async fn reset_password(
        &self,
        reset_token: &str,
        _password: &str,
        token: &CancellationToken,
    ) -> CardResult<()> {
        if reset_token.trim().is_empty() {
            return Err(CardError::InvalidToken);
        }
        self.wait(token, self.delays.auth()).await?;
        info!("Password updated");
        Ok(())
    }

    pub async fn verify_email(&self, verify_token: &str, token: &CancellationToken) -> CardResult<()> {
        if verify_token.trim().is_empty() {
            return Err(CardError::InvalidToken);
        }
        self.wait(token, self.delays.verify()).await?;
        info!("Email verified");
        Ok(())
    }

    pub async fn resend_verification(&self, email: &str, token: &CancellationToken) -> CardResult<()> {
        self.wait(token, self.delays.auth()).await?;
        info!(email = %email.trim(), "Verification email re-sent");
        Ok(())
    }

    pub async fn load_profile(&self, token: &CancellationToken) -> CardResult<UserProfile> {
        self.wait(token, self.delays.load()).await?;
        Ok(self.profile.read().clone())
    }

    pub async fn save_profile(&self, profile: UserProfile, token: &CancellationToken) -> CardResult<UserProfile> {
        self.wait(token, self.delays.save()).await?;
        *self.profile.write() = profile.clone();
        info!(username = %profile.username, "Profile saved");
        Ok(profile)
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(ApiDelays::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> CancellationToken {
        CancellationToken::new()
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let api = MockApi::instant();
        let mut draft = CardDraft::default();
        draft.first_name = "Nora".into();
        let saved = api.save_card(draft.clone(), &token()).await.unwrap();
        let loaded = api.load_card(&saved.id, &token()).await.unwrap();
        assert_eq!(loaded.draft, draft);
        assert_eq!(api.list_cards(&token()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_loads_sample() {
        let api = MockApi::instant();
        let card = api.load_card("42", &token()).await.unwrap();
        assert_eq!(card.id, "42");
        assert_eq!(card.draft.first_name, "Ahmed");
    }

    #[tokio::test]
    async fn test_missing_public_card() {
        let api = MockApi::instant();
        for key in ["", "missing"] {
            assert!(matches!(
                api.load_public_card(key, &token()).await,
                Err(CardError::CardNotFound(_))
            ));
        }
        assert!(api.load_public_card("ahmed", &token()).await.is_ok());
    }

    #[tokio::test]
    async fn test_private_card_hidden() {
        let api = MockApi::instant();
        let mut draft = CardDraft::default();
        draft.sharing.is_public = false;
        let saved = api.save_card(draft, &token()).await.unwrap();
        assert!(api.load_public_card(&saved.id, &token()).await.is_err());
    }

    #[tokio::test]
    async fn test_verify_requires_token() {
        let api = MockApi::instant();
        assert!(matches!(
            api.verify_email("", &token()).await,
            Err(CardError::InvalidToken)
        ));
        assert!(api.verify_email("abc", &token()).await.is_ok());
    }

    #[tokio::test]
    async fn test_views_and_likes() {
        let api = MockApi::instant();
        let mut card = api.load_public_card("ahmed", &token()).await.unwrap();
        let before = card.card.views;
        assert_eq!(api.track_view(&mut card, &token()).await.unwrap(), before + 1);
        assert_eq!(api.like_card(&mut card, true, &token()).await.unwrap(), 90);
        assert_eq!(api.like_card(&mut card, false, &token()).await.unwrap(), 89);
    }

    #[tokio::test]
    async fn test_cancelled_call() {
        let api = MockApi::instant();
        let t = token();
        t.cancel();
        assert!(matches!(
            api.save_card(CardDraft::default(), &t).await,
            Err(CardError::Cancelled)
        ));
        assert!(api.list_cards(&token()).await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_applies() {
        let api = MockApi::default();
        let start = tokio::time::Instant::now();
        api.request_password_reset("a@b.co", &token()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_register_sets_username() {
        let api = MockApi::instant();
        let p = api.register("Lina", "H", "Lina.H@example.com", &token()).await.unwrap();
        assert_eq!(p.username, "lina.h");
        assert_eq!(api.load_profile(&token()).await.unwrap().email, "Lina.H@example.com");
    }
}
