use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{flip_like, User};

/// A comment attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: User,
    /// Parent post; not checked against the post collection
    pub post_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub is_liked: bool,
}

impl Comment {
    pub fn new(post_id: String, content: String, author: User) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            author,
            post_id,
            created_at: Utc::now(),
            likes: 0,
            is_liked: false,
        }
    }

    pub fn toggle_like(&mut self) {
        flip_like(&mut self.likes, &mut self.is_liked);
    }
}
