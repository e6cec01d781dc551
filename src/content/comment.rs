//! Comment management methods for ContentStore

use crate::error::{require_text, BlogResult, Field};
use crate::models::{Comment, User};

use super::{ContentChange, ContentStore};

impl ContentStore {
    /// All comments, oldest first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments on `post_id`, oldest first.
    ///
    /// The returned iterator is lazy and can be cloned to walk it again.
    /// An unknown post id yields nothing.
    pub fn comments_for<'a>(
        &'a self,
        post_id: &'a str,
    ) -> impl Iterator<Item = &'a Comment> + Clone + 'a {
        self.comments.iter().filter(move |c| c.post_id == post_id)
    }

    /// Append a comment to `post_id`.
    ///
    /// Content is trimmed and must not be blank. The post id is not checked
    /// against the post collection. Returns the new comment's id.
    pub fn create_comment(
        &mut self,
        post_id: &str,
        content: &str,
        author: &User,
    ) -> BlogResult<String> {
        let content = require_text(Field::Comment, content, 1)?;

        let comment = Comment::new(post_id.to_string(), content.to_string(), author.clone());
        let id = comment.id.clone();
        if self.get_post(post_id).is_none() {
            tracing::warn!("comment {} attached to unknown post {}", id, post_id);
        } else {
            tracing::debug!("comment {} added to post {}", id, post_id);
        }

        self.comments.push(comment.clone());
        self.publish(ContentChange::CommentAdded { comment });
        Ok(id)
    }

    /// Flip the viewer's like on a comment.
    ///
    /// Returns `false` and changes nothing when no comment has this id.
    pub fn toggle_comment_like(&mut self, comment_id: &str) -> bool {
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) else {
            tracing::warn!("like ignored: no comment {}", comment_id);
            return false;
        };

        comment.toggle_like();
        let change = ContentChange::CommentLikeToggled {
            comment_id: comment.id.clone(),
            likes: comment.likes,
            is_liked: comment.is_liked,
        };
        tracing::debug!(
            "comment {} liked={} likes={}",
            comment.id,
            comment.is_liked,
            comment.likes
        );

        self.publish(change);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::{bundled_seed, RecordingContentPort};
    use crate::config::AppConfig;
    use crate::models::Profile;

    async fn seeded() -> ContentStore {
        let port = RecordingContentPort::with_seed(bundled_seed().unwrap());
        let mut store = ContentStore::new(Arc::new(port), &AppConfig::default());
        store.load_initial().await.unwrap();
        store
    }

    fn bob() -> User {
        User::from_profile(Profile::new("bob", "bob@example.com"))
    }

    #[tokio::test]
    async fn test_create_comment_appends_in_order() {
        let mut store = seeded().await;
        let id = store.create_comment("1", "  Third!  ", &bob()).unwrap();

        let ids: Vec<&str> = store.comments_for("1").map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", id.as_str()]);

        let last = store.comments().last().unwrap();
        assert_eq!(last.content, "Third!");
        assert_eq!(last.likes, 0);
        assert!(!last.is_liked);
    }

    #[tokio::test]
    async fn test_create_comment_rejects_blank() {
        let mut store = seeded().await;
        let err = store.create_comment("1", "   ", &bob()).unwrap_err();

        assert_eq!(err.field(), Some(Field::Comment));
        assert_eq!(store.comments().len(), 2);
    }

    #[tokio::test]
    async fn test_comment_on_unknown_post_is_kept() {
        let mut store = seeded().await;
        store.create_comment("999", "hello", &bob()).unwrap();

        let found: Vec<&Comment> = store.comments_for("999").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "hello");
    }

    #[tokio::test]
    async fn test_comments_for_unknown_post_is_empty() {
        let store = seeded().await;
        assert_eq!(store.comments_for("2").count(), 0);
        assert_eq!(store.comments_for("nope").count(), 0);
    }

    #[tokio::test]
    async fn test_comments_for_is_restartable() {
        let store = seeded().await;
        let iter = store.comments_for("1");

        assert_eq!(iter.clone().count(), 2);
        assert_eq!(iter.count(), 2);
    }

    #[tokio::test]
    async fn test_toggle_comment_like_round_trip() {
        let mut store = seeded().await;

        assert!(store.toggle_comment_like("2"));
        let c = &store.comments()[1];
        assert_eq!((c.likes, c.is_liked), (2, false));

        assert!(store.toggle_comment_like("2"));
        let c = &store.comments()[1];
        assert_eq!((c.likes, c.is_liked), (3, true));
    }

    /// Log sink shared with a test subscriber.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_toggle_comment_like_logs_at_debug() {
        let mut store = seeded().await;
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(store.toggle_comment_like("1"));
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("DEBUG"));
        assert!(output.contains("comment 1 liked=true likes=6"));
    }

    #[tokio::test]
    async fn test_toggle_comment_like_unknown_is_noop() {
        let mut store = seeded().await;
        let before = store.comments().to_vec();

        assert!(!store.toggle_comment_like("404"));
        assert_eq!(store.comments(), before.as_slice());
    }
}
