//! Hack or Snooze REST API Client
//!
//! HTTP client for communicating with the hosted API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{
    AddStoryRequest, LoginRequest, LoginUser, SignupRequest, SignupUser, StoriesResponse,
    StoryResponse, TokenRequest, UserResponse,
};
use super::{ApiError, ApiResult, StoryApi};
use crate::models::{Authenticated, NewStory, Story, UserProfile};

/// Hosted Hack or Snooze API
pub const BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

/// Hack or Snooze REST API client
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API (e.g., "https://hack-or-snooze-v3.herokuapp.com")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiClient {
    /// Create a new API client with the given configuration
    pub fn new(config: ApiClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!("hack-or-snooze/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and decode a successful JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %text, "API request rejected");
            Err(ApiError::from_status(status.as_u16(), &text))
        }
    }
}

fn story_path(story_id: &str) -> String {
    format!("/stories/{}", urlencoding::encode(story_id))
}

fn user_path(username: &str) -> String {
    format!("/users/{}", urlencoding::encode(username))
}

fn favorite_path(username: &str, story_id: &str) -> String {
    format!(
        "{}/favorites/{}",
        user_path(username),
        urlencoding::encode(story_id)
    )
}

#[async_trait]
impl StoryApi for ApiClient {
    async fn get_stories(&self) -> ApiResult<Vec<Story>> {
        tracing::debug!("GET /stories");
        let response: StoriesResponse = self.send(self.client.get(self.url("/stories"))).await?;
        Ok(response.stories)
    }

    async fn get_story(&self, story_id: &str) -> ApiResult<Story> {
        let response: StoryResponse = self
            .send(self.client.get(self.url(&story_path(story_id))))
            .await?;
        Ok(response.story)
    }

    async fn add_story(&self, token: &str, story: &NewStory) -> ApiResult<Story> {
        tracing::debug!(title = %story.title, "POST /stories");
        let body = AddStoryRequest { token, story };
        let response: StoryResponse = self
            .send(self.client.post(self.url("/stories")).json(&body))
            .await?;
        Ok(response.story)
    }

    async fn delete_story(&self, token: &str, story_id: &str) -> ApiResult<Story> {
        tracing::debug!(story_id, "DELETE /stories");
        let body = TokenRequest { token };
        let response: StoryResponse = self
            .send(self.client.delete(self.url(&story_path(story_id))).json(&body))
            .await?;
        Ok(response.story)
    }

    async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> ApiResult<Authenticated> {
        tracing::debug!(username, "POST /signup");
        let body = SignupRequest {
            user: SignupUser {
                username,
                password,
                name,
            },
        };
        self.send(self.client.post(self.url("/signup")).json(&body))
            .await
    }

    async fn login(&self, username: &str, password: &str) -> ApiResult<Authenticated> {
        tracing::debug!(username, "POST /login");
        let body = LoginRequest {
            user: LoginUser { username, password },
        };
        self.send(self.client.post(self.url("/login")).json(&body))
            .await
    }

    async fn get_user(&self, token: &str, username: &str) -> ApiResult<UserProfile> {
        let request = self
            .client
            .get(self.url(&user_path(username)))
            .query(&[("token", token)]);
        let response: UserResponse = self.send(request).await?;
        Ok(response.user)
    }

    async fn add_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<UserProfile> {
        let request = self
            .client
            .post(self.url(&favorite_path(username, story_id)))
            .query(&[("token", token)]);
        let response: UserResponse = self.send(request).await?;
        Ok(response.user)
    }

    async fn remove_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<UserProfile> {
        let request = self
            .client
            .delete(self.url(&favorite_path(username, story_id)))
            .query(&[("token", token)]);
        let response: UserResponse = self.send(request).await?;
        Ok(response.user)
    }
}
