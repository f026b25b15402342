//! Front-end controller
//!
//! Owns the API handle, the story list, the current user and the credential
//! store, and exposes one method per user action (the navbar and button
//! clicks of the page).

use thiserror::Error;

use super::markup;
use super::nav::{NavBar, Page};
use crate::api::{ApiError, StoryApi};
use crate::models::{NewStory, Story};
use crate::session::{SessionError, SessionStore};
use crate::stories::StoryList;
use crate::user::User;

/// Errors surfaced by user actions
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("You must be logged in to do that")]
    LoginRequired,
}

pub type AppResult<T> = Result<T, AppError>;

/// Hack or Snooze front end
pub struct App<A> {
    api: A,
    session: SessionStore,
    story_list: StoryList,
    current_user: Option<User>,
    page: Page,
}

impl<A: StoryApi> App<A> {
    pub fn new(api: A, session: SessionStore) -> Self {
        Self {
            api,
            session,
            story_list: StoryList::default(),
            current_user: None,
            page: Page::default(),
        }
    }

    /// Restore a stored login, then fetch and show the stories
    pub async fn start(&mut self) -> AppResult<()> {
        tracing::debug!("Starting");
        self.current_user = self.restore_user().await;
        self.nav_all_stories().await?;
        Ok(())
    }

    async fn restore_user(&self) -> Option<User> {
        let credentials = match self.session.load() {
            Ok(Some(credentials)) => credentials,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(path = ?self.session.path(), error = %e, "Ignoring stored credentials");
                return None;
            }
        };

        User::login_via_stored_credentials(&self.api, &credentials.token, &credentials.username)
            .await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<&User> {
        let user = User::login(&self.api, username, password).await?;
        self.install_user(user)
    }

    pub async fn signup(&mut self, username: &str, password: &str, name: &str) -> AppResult<&User> {
        let user = User::signup(&self.api, username, password, name).await?;
        self.install_user(user)
    }

    fn install_user(&mut self, user: User) -> AppResult<&User> {
        self.session.save(&user.credentials())?;
        self.story_list.check_favorites(Some(&user));
        self.page = Page::AllStories;
        Ok(&*self.current_user.insert(user))
    }

    /// Forget the current user and the stored credentials
    pub fn logout(&mut self) -> AppResult<()> {
        self.session.clear()?;
        if let Some(user) = self.current_user.take() {
            tracing::info!(username = %user.username, "Logged out");
        }
        self.story_list.check_favorites(None);
        self.page = Page::AllStories;
        Ok(())
    }

    /// Reload the story list from the server and show it
    pub async fn nav_all_stories(&mut self) -> AppResult<&[Story]> {
        tracing::debug!("Showing all stories");
        self.story_list = StoryList::get_stories(&self.api).await?;
        self.story_list.check_favorites(self.current_user.as_ref());
        self.page = Page::AllStories;
        Ok(self.story_list.stories())
    }

    pub fn nav_favorites(&mut self) -> AppResult<&[Story]> {
        self.navigate(Page::Favorites)?;
        Ok(self.user()?.favorites.as_slice())
    }

    pub fn nav_own_stories(&mut self) -> AppResult<&[Story]> {
        self.navigate(Page::OwnStories)?;
        Ok(self.user()?.own_stories.as_slice())
    }

    pub fn nav_submit_form(&mut self) -> AppResult<()> {
        self.navigate(Page::SubmitForm)
    }

    pub fn nav_login(&mut self) -> AppResult<()> {
        self.navigate(Page::Login)
    }

    /// Switch pages, refusing login-only pages when logged out
    pub fn navigate(&mut self, page: Page) -> AppResult<()> {
        if page.requires_login() && self.current_user.is_none() {
            return Err(AppError::LoginRequired);
        }
        tracing::debug!(%page, "Navigating");
        self.page = page;
        Ok(())
    }

    /// Submit a story and put it at the top of the list
    pub async fn submit_story(&mut self, new_story: NewStory) -> AppResult<Story> {
        let user = self.current_user.as_mut().ok_or(AppError::LoginRequired)?;
        let story = self.story_list.add_story(&self.api, user, new_story).await?;
        self.page = Page::AllStories;
        Ok(story)
    }

    pub async fn favorite(&mut self, story_id: &str) -> AppResult<()> {
        let user = self.current_user.as_mut().ok_or(AppError::LoginRequired)?;
        user.add_favorite(&self.api, story_id).await?;
        self.story_list.check_favorites(Some(&*user));
        Ok(())
    }

    pub async fn unfavorite(&mut self, story_id: &str) -> AppResult<()> {
        let user = self.current_user.as_mut().ok_or(AppError::LoginRequired)?;
        user.remove_favorite(&self.api, story_id).await?;
        self.story_list.check_favorites(Some(&*user));
        Ok(())
    }

    /// Star click: flip the favorite. Returns whether the story is now a favorite.
    pub async fn toggle_favorite(&mut self, story_id: &str) -> AppResult<bool> {
        let user = self.current_user.as_mut().ok_or(AppError::LoginRequired)?;
        let favorite = user.toggle_favorite(&self.api, story_id).await?;
        self.story_list.check_favorites(Some(&*user));
        Ok(favorite)
    }

    /// Trash click on one of the user's stories
    pub async fn delete_story(&mut self, story_id: &str) -> AppResult<Story> {
        let user = self.current_user.as_mut().ok_or(AppError::LoginRequired)?;
        Ok(self.story_list.remove_story(&self.api, user, story_id).await?)
    }

    /// HTML for the current page
    pub fn render(&self) -> String {
        let logged_in = self.current_user.is_some();
        match (self.page, self.current_user.as_ref()) {
            (Page::AllStories, _) => {
                markup::story_list_markup(self.story_list.stories(), logged_in)
            }
            (Page::SubmitForm, _) => format!(
                "{}\n{}",
                markup::submit_form_markup(),
                markup::story_list_markup(self.story_list.stories(), logged_in)
            ),
            (Page::Login, _) => markup::login_forms_markup().to_string(),
            (Page::Favorites, Some(user)) => markup::favorites_markup(user),
            (Page::OwnStories, Some(user)) => markup::own_stories_markup(user),
            (Page::Favorites | Page::OwnStories, None) => String::new(),
        }
    }

    pub fn navbar(&self) -> NavBar {
        NavBar::for_user(self.current_user.as_ref())
    }

    fn user(&self) -> AppResult<&User> {
        self.current_user.as_ref().ok_or(AppError::LoginRequired)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn story_list(&self) -> &StoryList {
        &self.story_list
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}
