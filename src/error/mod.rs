//! Unified error handling for the blog core.
//!
//! - **Validation errors**: empty or too-short fields, reported with the field
//! - **Auth errors**: credential mismatch, missing session
//! - **Port errors**: failures behind the persistence port
//!
//! Not-found conditions (liking an unknown post or comment) are not errors;
//! those operations are silent no-ops.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | User | Invalid input | No |
//! | Auth | Authentication problem | No |
//! | Backend | Content service problem | Yes |

mod auth;
mod blog_error;
mod category;
mod result;
mod validation;

pub use auth::AuthError;
pub use blog_error::BlogError;
pub use category::ErrorCategory;
pub use result::BlogResult;
pub use validation::{Field, Reason, ValidationError};

pub(crate) use validation::require_text;
