mod comment;
mod post;
pub mod text_utils;
mod user;

pub use comment::Comment;
pub use post::Post;
pub use text_utils::{excerpt, format_long_date, format_relative, normalize_tags};
pub use user::{Credentials, Profile, User};

/// Flip a like flag and move its counter with it.
///
/// `likes` never drops below zero, even for seed data whose flag and counter disagree.
pub(crate) fn flip_like(likes: &mut u32, is_liked: &mut bool) {
    if *is_liked {
        *likes = likes.saturating_sub(1);
    } else {
        *likes = likes.saturating_add(1);
    }
    *is_liked = !*is_liked;
}
