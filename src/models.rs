//! Core data types for Hack or Snooze
//!
//! Plain records mirroring what the remote API returns:
//! - `Story`: a submitted link with its author and poster
//! - `NewStory`: the payload for submitting a story
//! - `UserProfile`: the wire shape of a user
//! - `Authenticated`: a user profile plus the login token issued for it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single story in the system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Server-assigned identifier
    pub story_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    /// Username of the user who posted the story
    pub username: String,
    pub created_at: DateTime<Utc>,
    /// Whether the current user has favorited this story.
    ///
    /// Client-side only: never read from the API.
    #[serde(default, skip_deserializing)]
    pub favorite: bool,
}

impl Story {
    /// Parse the hostname (with any explicit non-default port) out of the
    /// story URL.
    ///
    /// Falls back to the text between `//` and the next `/` when the URL
    /// does not parse, so half-formed URLs submitted by other clients still
    /// render something useful.
    pub fn host_name(&self) -> String {
        if let Some(host) = reqwest::Url::parse(&self.url)
            .ok()
            .and_then(|url| {
                let host = url.host_str()?;
                Some(match url.port() {
                    Some(port) => format!("{host}:{port}"),
                    None => host.to_string(),
                })
            })
        {
            return host;
        }

        let rest = match self.url.split_once("//") {
            Some((_, rest)) => rest,
            None => self.url.as_str(),
        };
        rest.split('/').next().unwrap_or_default().to_string()
    }

    /// Builder method: mark as favorite
    pub fn into_favorite(mut self) -> Self {
        self.favorite = true;
        self
    }
}

/// Story data submitted by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStory {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl NewStory {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
        }
    }
}

/// A user as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub favorites: Vec<Story>,
    /// Stories posted by this user
    #[serde(default)]
    pub stories: Vec<Story>,
}

/// Response to a signup or login: the profile plus a fresh token
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Authenticated {
    pub token: String,
    pub user: UserProfile,
}
