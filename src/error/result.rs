//! Result type alias for blog core operations.

use super::blog_error::BlogError;

/// Type alias for Results using BlogError.
pub type BlogResult<T> = Result<T, BlogError>;
