//! Post management methods for ContentStore

use crate::error::{require_text, BlogError, BlogResult, Field};
use crate::models::{Post, User};

use super::{ContentChange, ContentStore};

impl ContentStore {
    /// All posts in store order (most recent first), ignoring the search term.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Get a post by ID
    pub fn get_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Get the number of posts
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Publish a new post at the top of the feed.
    ///
    /// Title and content are trimmed and must meet the configured minimum
    /// lengths; every failing field is reported together. Tags are trimmed, deduplicated and capped at five.
    /// Returns the new post's id.
    pub fn create_post<I, S>(
        &mut self,
        title: &str,
        content: &str,
        tags: I,
        author: &User,
    ) -> BlogResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let title = require_text(Field::Title, title, self.rules.min_title_chars);
        let content = require_text(Field::Content, content, self.rules.min_content_chars);
        let (title, content) = match (title, content) {
            (Ok(title), Ok(content)) => (title, content),
            (title, content) => {
                let errs = title.err().into_iter().chain(content.err()).collect();
                return Err(BlogError::Validation(errs));
            }
        };

        let post = Post::compose(title.to_string(), content.to_string(), tags, author.clone());
        let id = post.id.clone();
        tracing::debug!("post {} created by {}", id, author.username);

        self.posts.insert(0, post.clone());
        self.publish(ContentChange::PostCreated { post });
        Ok(id)
    }

    /// Flip the viewer's like on a post.
    ///
    /// Returns `false` and changes nothing when no post has this id.
    pub fn toggle_like(&mut self, post_id: &str) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            tracing::warn!("like ignored: no post {}", post_id);
            return false;
        };

        post.toggle_like();
        let change = ContentChange::PostLikeToggled {
            post_id: post.id.clone(),
            likes: post.likes,
            is_liked: post.is_liked,
        };
        tracing::debug!("post {} liked={} likes={}", post.id, post.is_liked, post.likes);

        self.publish(change);
        true
    }
}
