//! Type definitions for the application state.
//!
//! - [`Screen`] - Which top-level screen is displayed
//! - [`NavTarget`] - Navigation requests from the presentation layer
//! - [`SessionSignal`] - Session transitions the coordinator reacts to
//! - [`Intent`] / [`Outcome`] - Requests dispatched into the app and their results

use serde::Serialize;

use crate::models::{Credentials, Profile, User};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Session check in progress
    #[default]
    Loading,
    /// Sign-in / registration form
    AuthRequired,
    /// Post feed
    Home,
    /// New post form
    ComposeNewPost,
}

impl Screen {
    /// Short name used by the presentation layer ("loading", "auth", "home", "create").
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Loading => "loading",
            Screen::AuthRequired => "auth",
            Screen::Home => "home",
            Screen::ComposeNewPost => "create",
        }
    }

    /// Whether this screen needs a signed-in user.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Home | Screen::ComposeNewPost)
    }
}

/// An explicit navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Open the sign-in form
    SignIn,
    /// Go to the feed
    Home,
    /// Open the new post form
    Create,
    /// Leave the new post form without publishing
    Cancel,
    /// A post was just published
    Published,
}

/// Session transitions that move the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// The existing-session check finished
    Ready { authenticated: bool },
    /// Login or registration succeeded
    SignedIn,
    SignedOut,
}

/// A request from the presentation layer.
#[derive(Debug, Clone)]
pub enum Intent {
    Login(Credentials),
    Register(Profile),
    Logout,
    Search(String),
    CreatePost {
        title: String,
        content: String,
        tags: Vec<String>,
    },
    CreateComment {
        post_id: String,
        content: String,
    },
    ToggleLike(String),
    ToggleCommentLike(String),
    /// Expand a post's comment section, or collapse it if already expanded
    ToggleComments(String),
    Navigate(NavTarget),
}

impl Intent {
    /// Short label for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Login(_) => "login",
            Intent::Register(_) => "register",
            Intent::Logout => "logout",
            Intent::Search(_) => "search",
            Intent::CreatePost { .. } => "create_post",
            Intent::CreateComment { .. } => "create_comment",
            Intent::ToggleLike(_) => "toggle_like",
            Intent::ToggleCommentLike(_) => "toggle_comment_like",
            Intent::ToggleComments(_) => "toggle_comments",
            Intent::Navigate(_) => "navigate",
        }
    }
}

/// What a successfully dispatched intent did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    SignedIn(User),
    SignedOut,
    SearchUpdated,
    PostCreated { post_id: String },
    CommentCreated { comment_id: String },
    /// `found` is false when the id matched nothing and nothing changed
    LikeToggled { found: bool },
    /// Id of the post whose comments are now expanded, if any
    CommentsToggled { expanded: Option<String> },
    Navigated(Screen),
}
