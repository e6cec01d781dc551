//! View state module for decoupling rendering from application state.
//!
//! Rendering is a pure function of data. [`AppViewState`] borrows everything
//! a renderer needs from the [`App`](crate::app::App), so the presentation
//! layer never touches the stores directly.
//!
//! ```text
//! ┌─────────────────┐
//! │      App        │
//! │  (owns state)   │
//! └────────┬────────┘
//!          │ view()
//!          ▼
//! ┌─────────────────┐
//! │  AppViewState   │
//! │  (borrows data) │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Presentation    │
//! │ (pure rendering)│
//! └─────────────────┘
//! ```
//!
//! ## Components
//!
//! - [`AppViewState`]: Everything needed to draw the current screen
//! - [`FeedStatus`]: What the home feed should show

mod app_view;
mod feed;

pub use app_view::AppViewState;
pub use feed::FeedStatus;
