//! Trait abstractions for dependency injection and testability.
//!
//! The stores never talk to a backend directly; they go through these ports
//! so a real service can replace the in-memory adapters without changing the
//! stores' public contract.
//!
//! # Traits
//!
//! - [`ContentPort`] - Initial content fetch and mutation recording
//! - [`UserDirectory`] - Credential lookup for sign-in

pub mod content;
pub mod directory;

pub use content::{ContentPort, ContentSeed, PortError};
pub use directory::UserDirectory;
