//! Search filtering for ContentStore

use crate::models::Post;

use super::{ContentChange, ContentStore};

impl ContentStore {
    /// Posts whose title, content or any tag contains `term`, ignoring case.
    ///
    /// An empty term returns every post. Store order (most recent first) is kept
    /// and the collection itself is never touched.
    pub fn search(&self, term: &str) -> Vec<&Post> {
        let needle = term.to_lowercase();
        self.posts.iter().filter(|p| p.matches(&needle)).collect()
    }

    /// The term currently filtering the feed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Change the term that filters [`visible_posts`](Self::visible_posts).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        tracing::debug!("search term set to {:?}", term);
        self.search_term = term.clone();
        self.publish(ContentChange::SearchChanged { term });
    }

    /// Posts matching the current search term.
    pub fn visible_posts(&self) -> Vec<&Post> {
        self.search(&self.search_term)
    }
}
