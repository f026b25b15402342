//! # Hack or Snooze
//!
//! Client for the Hack or Snooze story-sharing API: browse submitted
//! stories, sign up, log in, submit stories and keep a list of favorites.
//!
//! All persistent state lives on the remote server. This crate wraps the
//! REST calls, keeps an in-memory mirror of the stories and the current
//! user, and renders them.
//!
//! ## Modules
//!
//! - [`api`]: REST client and the [`StoryApi`] trait
//! - [`models`]: Story and user records
//! - [`stories`]: In-memory story list
//! - [`user`]: The logged-in user with favorites and own stories
//! - [`session`]: Login persistence between runs
//! - [`view`]: HTML markup, navigation and the front-end controller
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hack_or_snooze::{ApiClient, ApiClientConfig, StoryList, User};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new(ApiClientConfig::default())?;
//!
//!     let mut stories = StoryList::get_stories(&api).await?;
//!     let mut user = User::login(&api, "hueter", "foo").await?;
//!
//!     let first = stories.stories()[0].story_id.clone();
//!     user.add_favorite(&api, &first).await?;
//!     stories.check_favorites(Some(&user));
//!
//!     println!("{} stories, {} favorites", stories.len(), user.favorites.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod session;
pub mod stories;
pub mod user;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// Re-export top-level types for convenience
pub use api::{ApiClient, ApiClientConfig, ApiError, ApiResult, StoryApi, BASE_URL};

pub use models::{Authenticated, NewStory, Story, UserProfile};

pub use stories::StoryList;

pub use user::User;

pub use session::{Credentials, SessionError, SessionStore};

pub use view::{App, AppError, AppResult, NavBar, Page};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, SessionConfig};
