//! Common test utilities for integration tests.
//!
//! Fixtures here build apps and stores on the bundled demo data with no
//! simulated latency, so tests only wait when they ask to.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use quill::adapters::{bundled_seed, InMemoryContentPort, RecordingContentPort, StaticDirectory};
use quill::app::App;
use quill::config::AppConfig;
use quill::content::ContentStore;
use quill::models::{Profile, User};

/// A body long enough to pass the default content minimum.
pub const LONG_BODY: &str =
    "Rust ownership makes shared mutable state explicit, which keeps the store honest about who changes what.";

/// Default config without simulated delays.
pub fn test_config() -> AppConfig {
    AppConfig::default()
        .with_load_delay(Duration::ZERO)
        .with_session_delay(Duration::ZERO)
}

/// An author who is not in the demo directory.
pub fn test_author() -> User {
    User::from_profile(Profile::new("alice", "alice@example.com"))
}

/// An app that has finished startup and sits on the sign-in screen.
pub async fn booted_app() -> App {
    let mut app = App::in_memory(test_config());
    app.bootstrap().await.expect("bundled seed loads");
    app
}

/// An app backed by a recording port seeded with the bundled data.
pub async fn recorded_app() -> (App, RecordingContentPort) {
    let port = RecordingContentPort::with_seed(bundled_seed().expect("bundled seed parses"));
    let mut app = App::new(
        test_config(),
        Arc::new(port.clone()),
        Arc::new(StaticDirectory::demo()),
    );
    app.bootstrap().await.expect("recorded seed loads");
    (app, port)
}

/// A content store loaded with the bundled data.
pub async fn loaded_store() -> ContentStore {
    let mut store = ContentStore::new(Arc::new(InMemoryContentPort::default()), &test_config());
    store.load_initial().await.expect("bundled seed loads");
    store
}
