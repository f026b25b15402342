//! Navigation state
//!
//! Which page is showing and what the navbar offers for the current login.

use std::fmt;
use std::str::FromStr;

use crate::user::User;

/// A page of the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Every story, newest first
    #[default]
    AllStories,
    /// Form for submitting a new story (shown above the story list)
    SubmitForm,
    /// Login and signup forms
    Login,
    Favorites,
    /// Stories posted by the current user
    OwnStories,
}

impl Page {
    /// Pages that only make sense for a logged-in user
    pub fn requires_login(&self) -> bool {
        matches!(self, Page::SubmitForm | Page::Favorites | Page::OwnStories)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::AllStories => "all",
            Page::SubmitForm => "submit",
            Page::Login => "login",
            Page::Favorites => "favorites",
            Page::OwnStories => "mine",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "stories" => Ok(Page::AllStories),
            "submit" => Ok(Page::SubmitForm),
            "login" => Ok(Page::Login),
            "favorites" => Ok(Page::Favorites),
            "mine" | "my-stories" => Ok(Page::OwnStories),
            other => Err(format!(
                "Unknown page: {other}. Use: all, submit, login, favorites, mine"
            )),
        }
    }
}

/// Navbar visibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    /// Submit / favorites / my stories links
    pub main_links_visible: bool,
    pub login_visible: bool,
    pub logout_visible: bool,
    /// Username shown in the profile link
    pub profile: Option<String>,
}

impl NavBar {
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                main_links_visible: true,
                login_visible: false,
                logout_visible: true,
                profile: Some(user.username.clone()),
            },
            None => Self {
                main_links_visible: false,
                login_visible: true,
                logout_visible: false,
                profile: None,
            },
        }
    }
}
