//! Domain objects for the blog core.
//!
//! - [`SessionStore`] - Who is signed in, and the sign-in/out operations

pub mod session;

pub use session::{SessionSnapshot, SessionState, SessionStore};
