//! Quill - client-side state core for a small blog
//!
//! Tracks who is signed in, holds the posts and comments, and decides which
//! screen the presentation layer should show. Content comes from a pluggable
//! [`traits::ContentPort`]; the bundled in-memory backend serves demo data.

pub mod adapters;
pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod models;
pub mod traits;
pub mod view_state;
