//! In-memory stand-in for the remote API, used by unit tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::{ApiError, ApiResult, StoryApi};
use crate::models::{Authenticated, NewStory, Story, UserProfile};

#[derive(Default)]
struct State {
    stories: Vec<Story>,
    accounts: HashMap<String, Account>,
    tokens: HashMap<String, String>,
    next_id: u32,
    calls: Vec<String>,
}

struct Account {
    password: String,
    name: String,
    favorites: Vec<String>,
}

/// Behaves like the hosted API: newest stories first, favorites and own
/// stories resolved from the shared story table.
#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register an account directly, returning its token
    pub(crate) fn with_account(self, username: &str, password: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.accounts.insert(
                username.to_string(),
                Account {
                    password: password.to_string(),
                    name: format!("{username} name"),
                    favorites: Vec::new(),
                },
            );
            state
                .tokens
                .insert(token_for(username), username.to_string());
        }
        self
    }

    /// Seed a story posted by `username`
    pub(crate) fn with_story(self, story_id: &str, title: &str, username: &str) -> Self {
        self.state.lock().unwrap().stories.push(story(story_id, title, username));
        self
    }

    /// Names of the API operations called so far
    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn authorize(state: &State, token: &str) -> ApiResult<String> {
        state
            .tokens
            .get(token)
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()))
    }

    fn profile(state: &State, username: &str) -> ApiResult<UserProfile> {
        let account = state
            .accounts
            .get(username)
            .ok_or_else(|| ApiError::NotFound(format!("No user named {username}")))?;

        Ok(UserProfile {
            username: username.to_string(),
            name: account.name.clone(),
            created_at: Utc::now(),
            favorites: account
                .favorites
                .iter()
                .filter_map(|id| state.stories.iter().find(|s| &s.story_id == id).cloned())
                .collect(),
            stories: state
                .stories
                .iter()
                .filter(|s| s.username == username)
                .cloned()
                .collect(),
        })
    }
}

pub(crate) fn token_for(username: &str) -> String {
    format!("token-{username}")
}

pub(crate) fn story(story_id: &str, title: &str, username: &str) -> Story {
    Story {
        story_id: story_id.to_string(),
        title: title.to_string(),
        author: "Some Author".to_string(),
        url: format!("https://{story_id}.example.com/post"),
        username: username.to_string(),
        created_at: Utc::now(),
        favorite: false,
    }
}

#[async_trait]
impl StoryApi for FakeApi {
    async fn get_stories(&self) -> ApiResult<Vec<Story>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("get_stories".into());
        Ok(state.stories.clone())
    }

    async fn get_story(&self, story_id: &str) -> ApiResult<Story> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("get_story".into());
        state
            .stories
            .iter()
            .find(|s| s.story_id == story_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("No story with ID {story_id}")))
    }

    async fn add_story(&self, token: &str, new_story: &NewStory) -> ApiResult<Story> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("add_story".into());
        let username = Self::authorize(&state, token)?;

        state.next_id += 1;
        let mut added = story(&format!("new-{}", state.next_id), &new_story.title, &username);
        added.author = new_story.author.clone();
        added.url = new_story.url.clone();
        state.stories.insert(0, added.clone());
        Ok(added)
    }

    async fn delete_story(&self, token: &str, story_id: &str) -> ApiResult<Story> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("delete_story".into());
        let username = Self::authorize(&state, token)?;

        let index = state
            .stories
            .iter()
            .position(|s| s.story_id == story_id)
            .ok_or_else(|| ApiError::NotFound(format!("No story with ID {story_id}")))?;
        if state.stories[index].username != username {
            return Err(ApiError::Api {
                status: 403,
                message: "You can only delete your own stories".to_string(),
            });
        }

        let removed = state.stories.remove(index);
        for account in state.accounts.values_mut() {
            account.favorites.retain(|id| id != story_id);
        }
        Ok(removed)
    }

    async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> ApiResult<Authenticated> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("signup".into());
        if state.accounts.contains_key(username) {
            return Err(ApiError::Api {
                status: 409,
                message: format!("There is already a user with username '{username}'"),
            });
        }

        state.accounts.insert(
            username.to_string(),
            Account {
                password: password.to_string(),
                name: name.to_string(),
                favorites: Vec::new(),
            },
        );
        let token = token_for(username);
        state.tokens.insert(token.clone(), username.to_string());

        Ok(Authenticated {
            token,
            user: Self::profile(&state, username)?,
        })
    }

    async fn login(&self, username: &str, password: &str) -> ApiResult<Authenticated> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("login".into());
        let valid = state
            .accounts
            .get(username)
            .map(|account| account.password == password)
            .unwrap_or(false);
        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(Authenticated {
            token: token_for(username),
            user: Self::profile(&state, username)?,
        })
    }

    async fn get_user(&self, token: &str, username: &str) -> ApiResult<UserProfile> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("get_user".into());
        Self::authorize(&state, token)?;
        Self::profile(&state, username)
    }

    async fn add_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<UserProfile> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("add_favorite".into());
        Self::authorize(&state, token)?;
        if !state.stories.iter().any(|s| s.story_id == story_id) {
            return Err(ApiError::NotFound(format!("No story with ID {story_id}")));
        }

        let account = state
            .accounts
            .get_mut(username)
            .ok_or_else(|| ApiError::NotFound(format!("No user named {username}")))?;
        if !account.favorites.iter().any(|id| id == story_id) {
            account.favorites.push(story_id.to_string());
        }
        Self::profile(&state, username)
    }

    async fn remove_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> ApiResult<UserProfile> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("remove_favorite".into());
        Self::authorize(&state, token)?;

        let account = state
            .accounts
            .get_mut(username)
            .ok_or_else(|| ApiError::NotFound(format!("No user named {username}")))?;
        account.favorites.retain(|id| id != story_id);
        Self::profile(&state, username)
    }
}
