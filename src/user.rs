//! The current user
//!
//! In-memory mirror of the logged-in user, rebuilt from API responses:
//! profile fields, favorites, own stories and the login token.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{ApiResult, StoryApi};
use crate::models::{Authenticated, Story, UserProfile};
use crate::session::Credentials;

/// The authenticated visitor
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Favorited stories, each with `favorite` set
    pub favorites: Vec<Story>,
    /// Stories this user posted
    pub own_stories: Vec<Story>,
    #[serde(skip)]
    login_token: String,
}

impl User {
    /// Build a user from a profile and the token that goes with it
    pub fn from_profile(profile: UserProfile, token: impl Into<String>) -> Self {
        Self {
            username: profile.username,
            name: profile.name,
            created_at: profile.created_at,
            favorites: profile
                .favorites
                .into_iter()
                .map(Story::into_favorite)
                .collect(),
            own_stories: profile.stories,
            login_token: token.into(),
        }
    }

    fn from_authenticated(auth: Authenticated) -> Self {
        Self::from_profile(auth.user, auth.token)
    }

    /// Register a new user with the API
    pub async fn signup(
        api: &dyn StoryApi,
        username: &str,
        password: &str,
        name: &str,
    ) -> ApiResult<Self> {
        let auth = api.signup(username, password, name).await?;
        tracing::info!(username = %auth.user.username, "Signed up");
        Ok(Self::from_authenticated(auth))
    }

    /// Log in an existing user
    pub async fn login(api: &dyn StoryApi, username: &str, password: &str) -> ApiResult<Self> {
        let auth = api.login(username, password).await?;
        tracing::info!(username = %auth.user.username, "Logged in");
        Ok(Self::from_authenticated(auth))
    }

    /// Restore a login from a saved token and username.
    ///
    /// Any failure (expired token, deleted user, network) is logged and
    /// reported as `None`.
    pub async fn login_via_stored_credentials(
        api: &dyn StoryApi,
        token: &str,
        username: &str,
    ) -> Option<Self> {
        match api.get_user(token, username).await {
            Ok(profile) => Some(Self::from_profile(profile, token)),
            Err(e) => {
                tracing::error!(username, error = %e, "Restoring stored login failed");
                None
            }
        }
    }

    pub fn login_token(&self) -> &str {
        &self.login_token
    }

    /// Credentials to persist for the next run
    pub fn credentials(&self) -> Credentials {
        Credentials {
            token: self.login_token.clone(),
            username: self.username.clone(),
        }
    }

    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|s| s.story_id == story_id)
    }

    pub fn is_own_story(&self, story_id: &str) -> bool {
        self.own_stories.iter().any(|s| s.story_id == story_id)
    }

    /// Add a favorite on the server and take the server's favorites list
    pub async fn add_favorite(&mut self, api: &dyn StoryApi, story_id: &str) -> ApiResult<()> {
        tracing::debug!(story_id, "Adding favorite");
        let profile = api
            .add_favorite(&self.login_token, &self.username, story_id)
            .await?;
        self.set_favorites(profile.favorites);
        Ok(())
    }

    /// Remove a favorite on the server and take the server's favorites list
    pub async fn remove_favorite(&mut self, api: &dyn StoryApi, story_id: &str) -> ApiResult<()> {
        tracing::debug!(story_id, "Removing favorite");
        let profile = api
            .remove_favorite(&self.login_token, &self.username, story_id)
            .await?;
        self.set_favorites(profile.favorites);
        Ok(())
    }

    /// Flip the favorite state of a story. Returns whether it is now a favorite.
    pub async fn toggle_favorite(&mut self, api: &dyn StoryApi, story_id: &str) -> ApiResult<bool> {
        if self.is_favorite(story_id) {
            self.remove_favorite(api, story_id).await?;
        } else {
            self.add_favorite(api, story_id).await?;
        }
        Ok(self.is_favorite(story_id))
    }

    fn set_favorites(&mut self, favorites: Vec<Story>) {
        self.favorites = favorites.into_iter().map(Story::into_favorite).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::testing::{token_for, FakeApi};

    fn api() -> FakeApi {
        FakeApi::new()
            .with_account("alice", "pw")
            .with_story("s1", "First", "bob")
            .with_story("s2", "Second", "alice")
    }

    #[tokio::test]
    async fn test_login() {
        let api = api();
        let user = User::login(&api, "alice", "pw").await.unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.login_token(), token_for("alice"));
        assert_eq!(user.own_stories.len(), 1);
        assert!(user.is_own_story("s2"));
        assert!(user.favorites.is_empty());
    }

    #[tokio::test]
    async fn test_login_bad_password() {
        let api = api();
        let err = User::login(&api, "alice", "nope").await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_signup() {
        let api = api();
        let user = User::signup(&api, "carol", "pw", "Carol C").await.unwrap();
        assert_eq!(user.name, "Carol C");
        assert_eq!(user.credentials().username, "carol");

        let err = User::signup(&api, "carol", "pw", "Carol C").await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_login_via_stored_credentials() {
        let api = api();
        let user = User::login_via_stored_credentials(&api, &token_for("alice"), "alice").await;
        assert_eq!(user.map(|u| u.username), Some("alice".to_string()));

        let user = User::login_via_stored_credentials(&api, "stale", "alice").await;
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_favorites_follow_server() {
        let api = api();
        let mut user = User::login(&api, "alice", "pw").await.unwrap();

        user.add_favorite(&api, "s1").await.unwrap();
        assert!(user.is_favorite("s1"));
        assert!(user.favorites.iter().all(|s| s.favorite));

        user.remove_favorite(&api, "s1").await.unwrap();
        assert!(!user.is_favorite("s1"));
        assert!(user.favorites.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_favorite() {
        let api = api();
        let mut user = User::login(&api, "alice", "pw").await.unwrap();

        assert!(user.toggle_favorite(&api, "s2").await.unwrap());
        assert!(!user.toggle_favorite(&api, "s2").await.unwrap());
        assert_eq!(
            api.calls().iter().filter(|c| c.ends_with("_favorite")).count(),
            2
        );
    }

    #[tokio::test]
    async fn test_favorite_unknown_story() {
        let api = api();
        let mut user = User::login(&api, "alice", "pw").await.unwrap();

        let err = user.add_favorite(&api, "missing").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(user.favorites.is_empty());
    }
}
