//! Concrete implementations of the trait abstractions.
//!
//! # Adapters
//!
//! - [`InMemoryContentPort`] - Bundled seed dataset behind a simulated fetch delay
//! - [`StaticDirectory`] - Fixed user table for sign-in
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingContentPort`] - Records every change and can be told to fail

pub mod in_memory;
pub mod mock;
pub mod static_directory;

pub use in_memory::{bundled_seed, InMemoryContentPort};
pub use mock::RecordingContentPort;
pub use static_directory::{StaticDirectory, DEMO_SECRET};
