//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`RecordingContentPort`] - Content port that records every change

pub mod recording;

pub use recording::RecordingContentPort;
