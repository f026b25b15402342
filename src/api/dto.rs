//! Data Transfer Objects
//!
//! Request and response envelopes for the Hack or Snooze API.
//! Records inside the envelopes are the types from [`crate::models`].

use serde::{Deserialize, Serialize};

use crate::models::{NewStory, Story, UserProfile};

// ============================================
// REQUESTS
// ============================================

/// `POST /stories`
#[derive(Debug, Serialize)]
pub struct AddStoryRequest<'a> {
    pub token: &'a str,
    pub story: &'a NewStory,
}

/// Body for endpoints that only carry a token (`DELETE /stories/{id}`)
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub token: &'a str,
}

/// `POST /signup`
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub user: SignupUser<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignupUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

/// `POST /login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub user: LoginUser<'a>,
}

#[derive(Debug, Serialize)]
pub struct LoginUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// ============================================
// RESPONSES
// ============================================

/// `GET /stories`
#[derive(Debug, Deserialize)]
pub struct StoriesResponse {
    #[serde(default)]
    pub stories: Vec<Story>,
}

/// `GET /stories/{id}`, `POST /stories` and `DELETE /stories/{id}`
#[derive(Debug, Deserialize)]
pub struct StoryResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub story: Story,
}

/// `GET /users/{username}` and both favorites endpoints
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: UserProfile,
}
