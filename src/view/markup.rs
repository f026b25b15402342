//! HTML markup
//!
//! Renders story lists as `<li>` fragments, matching the page's
//! stylesheet classes.

use crate::models::Story;
use crate::user::User;

/// Markup for a single story.
///
/// `show_star` adds the favorite toggle; it is only useful when a user is
/// logged in.
pub fn story_markup(story: &Story, show_star: bool) -> String {
    render_story(story, show_star, false)
}

fn render_story(story: &Story, show_star: bool, show_trash: bool) -> String {
    let mut controls = String::new();
    if show_trash {
        controls.push_str("\n  <i class=\"fas fa-trash-alt trash-btn\"></i>");
    }
    if show_star {
        let style = if story.favorite { "fas" } else { "far" };
        controls.push_str(&format!("\n  <i class=\"{style} fa-star star-btn\"></i>"));
    }

    format!(
        r#"<li id="{id}">{controls}
  <a href="{url}" target="a_blank" class="story-link">{title}</a>
  <small class="story-hostname">({host})</small>
  <small class="story-author">by {author}</small>
  <small class="story-user">posted by {username}</small>
</li>"#,
        id = escape_html(&story.story_id),
        url = escape_html(link_href(&story.url)),
        title = escape_html(&story.title),
        host = escape_html(&story.host_name()),
        author = escape_html(&story.author),
        username = escape_html(&story.username),
    )
}

pub fn story_list_markup(stories: &[Story], show_star: bool) -> String {
    stories
        .iter()
        .map(|story| story_markup(story, show_star))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn favorites_markup(user: &User) -> String {
    if user.favorites.is_empty() {
        return "<h5>No favorites added!</h5>".to_string();
    }
    story_list_markup(&user.favorites, true)
}

/// The user's own stories, each with a delete button
pub fn own_stories_markup(user: &User) -> String {
    if user.own_stories.is_empty() {
        return "<h5>No stories added by user yet!</h5>".to_string();
    }

    user.own_stories
        .iter()
        .map(|story| {
            let mut story = story.clone();
            story.favorite = user.is_favorite(&story.story_id);
            render_story(&story, true, true)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Form for submitting a new story
pub fn submit_form_markup() -> &'static str {
    r#"<form id="new-story-form">
  <label for="author">author</label>
  <input id="author" required placeholder="author name">
  <label for="title">title</label>
  <input id="title" required placeholder="story title">
  <label for="url">url</label>
  <input id="url" type="url" required placeholder="story url">
  <button id="submit-new-story" type="submit">submit</button>
</form>"#
}

/// Login and signup forms
pub fn login_forms_markup() -> &'static str {
    r#"<form id="login-form">
  <h4>Login</h4>
  <label for="login-username">username</label>
  <input id="login-username" autocomplete="current-username">
  <label for="login-password">password</label>
  <input id="login-password" type="password" autocomplete="current-password">
  <button type="submit">login</button>
</form>
<form id="signup-form">
  <h4>Create Account</h4>
  <label for="signup-name">name</label>
  <input id="signup-name" autocapitalize="words">
  <label for="signup-username">username</label>
  <input id="signup-username" autocomplete="new-username">
  <label for="signup-password">password</label>
  <input id="signup-password" type="password" autocomplete="new-password">
  <button type="submit">create account</button>
</form>"#
}

/// Only web links are clickable; anything else (`javascript:`, `data:`)
/// points nowhere.
fn link_href(url: &str) -> &str {
    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => url,
        _ => "#",
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::story;
    use chrono::Utc;

    #[test]
    fn test_story_markup() {
        let s = story("s1", "Hello", "bob");
        let html = story_markup(&s, true);

        assert!(html.starts_with("<li id=\"s1\">"));
        assert!(html.contains("class=\"far fa-star star-btn\""));
        assert!(html.contains("href=\"https://s1.example.com/post\""));
        assert!(html.contains("(s1.example.com)"));
        assert!(html.contains("posted by bob"));

        let html = story_markup(&s.into_favorite(), true);
        assert!(html.contains("class=\"fas fa-star star-btn\""));
    }

    #[test]
    fn test_non_web_links_are_inert() {
        let mut s = story("s1", "Click me", "bob");
        s.url = "javascript:alert(1)".to_string();
        let html = story_markup(&s, false);

        assert!(html.contains("href=\"#\""));
        assert!(!html.contains("href=\"javascript:"));

        s.url = "HTTPS://Example.com/ok".to_string();
        assert!(story_markup(&s, false).contains("href=\"HTTPS://Example.com/ok\""));
    }

    #[test]
    fn test_story_markup_without_star() {
        let html = story_markup(&story("s1", "Hello", "bob"), false);
        assert!(!html.contains("fa-star"));
    }

    #[test]
    fn test_markup_escapes() {
        let mut s = story("s1", "<script>alert('x')</script>", "bob");
        s.author = "Tom & Jerry".to_string();
        let html = story_markup(&s, false);

        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("by Tom &amp; Jerry"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_lists() {
        let user = User::from_profile(
            crate::models::UserProfile {
                username: "alice".into(),
                name: "Alice".into(),
                created_at: Utc::now(),
                favorites: vec![],
                stories: vec![],
            },
            "tok",
        );

        assert_eq!(favorites_markup(&user), "<h5>No favorites added!</h5>");
        assert_eq!(
            own_stories_markup(&user),
            "<h5>No stories added by user yet!</h5>"
        );
    }

    #[test]
    fn test_own_stories_have_trash() {
        let user = User::from_profile(
            crate::models::UserProfile {
                username: "alice".into(),
                name: "Alice".into(),
                created_at: Utc::now(),
                favorites: vec![story("s1", "Mine", "alice")],
                stories: vec![story("s1", "Mine", "alice")],
            },
            "tok",
        );

        let html = own_stories_markup(&user);
        assert!(html.contains("trash-btn"));
        assert!(html.contains("fas fa-star"));
    }
}
