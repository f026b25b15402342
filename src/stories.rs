//! Story list
//!
//! In-memory mirror of the stories on the server, in the order the server
//! returns them (newest first).

use crate::api::{ApiResult, StoryApi};
use crate::models::{NewStory, Story};
use crate::user::User;

/// List of stories shown by the UI
#[derive(Debug, Clone, Default)]
pub struct StoryList {
    stories: Vec<Story>,
}

impl StoryList {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Fetch every story from the API and build a list from them
    pub async fn get_stories(api: &dyn StoryApi) -> ApiResult<Self> {
        let stories = api.get_stories().await?;
        tracing::debug!(count = stories.len(), "Fetched stories");
        Ok(Self::new(stories))
    }

    /// Submit a story as `user`.
    ///
    /// The new story goes to the front of this list and of the user's own
    /// stories.
    pub async fn add_story(
        &mut self,
        api: &dyn StoryApi,
        user: &mut User,
        new_story: NewStory,
    ) -> ApiResult<Story> {
        tracing::debug!(title = %new_story.title, "Adding story");
        let story = api.add_story(user.login_token(), &new_story).await?;

        self.stories.insert(0, story.clone());
        user.own_stories.insert(0, story.clone());

        tracing::info!(story_id = %story.story_id, "Story added");
        Ok(story)
    }

    /// Delete one of `user`'s stories and drop it from every mirror
    pub async fn remove_story(
        &mut self,
        api: &dyn StoryApi,
        user: &mut User,
        story_id: &str,
    ) -> ApiResult<Story> {
        let story = api.delete_story(user.login_token(), story_id).await?;

        self.stories.retain(|s| s.story_id != story_id);
        user.own_stories.retain(|s| s.story_id != story_id);
        user.favorites.retain(|s| s.story_id != story_id);

        tracing::info!(story_id, "Story removed");
        Ok(story)
    }

    /// Set every story's `favorite` flag from the user's favorites.
    ///
    /// With no user logged in every flag is cleared.
    pub fn check_favorites(&mut self, user: Option<&User>) {
        for story in &mut self.stories {
            story.favorite = user.map(|u| u.is_favorite(&story.story_id)).unwrap_or(false);
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Story> {
        self.stories.iter()
    }

    pub fn get(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == story_id)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}
