//! Hack or Snooze REST API
//!
//! Client wrapper for the hosted story-sharing API.
//!
//! # Endpoints
//!
//! ## Stories
//! - `GET /stories` - List all stories
//! - `GET /stories/{id}` - Get a story
//! - `POST /stories` - Submit a story
//! - `DELETE /stories/{id}` - Delete one of your stories
//!
//! ## Users
//! - `POST /signup` - Create an account
//! - `POST /login` - Exchange credentials for a token
//! - `GET /users/{username}` - Get a user with favorites and stories
//!
//! ## Favorites
//! - `POST /users/{username}/favorites/{id}` - Add a favorite
//! - `DELETE /users/{username}/favorites/{id}` - Remove a favorite
//!
//! Every operation goes through the [`StoryApi`] trait so the in-memory
//! mirrors can run against any backend.

mod client;
pub mod dto;
pub mod error;

pub use client::{ApiClient, ApiClientConfig, BASE_URL};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::models::{Authenticated, NewStory, Story, UserProfile};

/// Operations offered by the story-sharing API
#[async_trait]
pub trait StoryApi: Send + Sync {
    /// Fetch every story (no auth required)
    async fn get_stories(&self) -> ApiResult<Vec<Story>>;

    /// Fetch a single story by id
    async fn get_story(&self, story_id: &str) -> ApiResult<Story>;

    /// Submit a story on behalf of the token's owner
    async fn add_story(&self, token: &str, story: &NewStory) -> ApiResult<Story>;

    /// Delete a story; only its poster may do so
    async fn delete_story(&self, token: &str, story_id: &str) -> ApiResult<Story>;

    /// Register a new user
    async fn signup(&self, username: &str, password: &str, name: &str)
        -> ApiResult<Authenticated>;

    /// Log in an existing user
    async fn login(&self, username: &str, password: &str) -> ApiResult<Authenticated>;

    /// Fetch a user profile, including favorites and own stories
    async fn get_user(&self, token: &str, username: &str) -> ApiResult<UserProfile>;

    /// Add a favorite; returns the updated profile
    async fn add_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<UserProfile>;

    /// Remove a favorite; returns the updated profile
    async fn remove_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<UserProfile>;
}
