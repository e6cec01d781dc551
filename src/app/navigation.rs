//! Screen selection.
//!
//! [`ViewCoordinator`] picks one of four screens from the session state and
//! explicit navigation requests. The transition rules are plain functions so
//! they can be checked without any store.

use crate::domain::SessionState;

use super::types::{NavTarget, Screen, SessionSignal};

/// Next screen after a session transition.
pub fn on_session_signal(current: Screen, signal: SessionSignal) -> Screen {
    match signal {
        SessionSignal::Ready {
            authenticated: false,
        } => Screen::AuthRequired,
        SessionSignal::Ready {
            authenticated: true,
        }
        | SessionSignal::SignedIn => match current {
            Screen::Loading | Screen::AuthRequired => Screen::Home,
            other => other,
        },
        SessionSignal::SignedOut => Screen::AuthRequired,
    }
}

/// Next screen after an explicit navigation request.
///
/// Requests are ignored while the session is still loading, and any request
/// for an authenticated screen without a user lands on the sign-in form.
pub fn on_navigate(current: Screen, target: NavTarget, session: &SessionState) -> Screen {
    if session.is_loading() {
        return current;
    }

    let wanted = match target {
        NavTarget::SignIn => Screen::AuthRequired,
        NavTarget::Create => Screen::ComposeNewPost,
        NavTarget::Home | NavTarget::Cancel | NavTarget::Published => Screen::Home,
    };

    if wanted.requires_auth() && !session.is_authenticated() {
        Screen::AuthRequired
    } else {
        wanted
    }
}

/// Holds the active screen for the application's lifetime.
#[derive(Debug, Clone, Default)]
pub struct ViewCoordinator {
    screen: Screen,
}

impl ViewCoordinator {
    /// Start on the loading screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Apply a session transition and return the resulting screen.
    pub fn on_session(&mut self, signal: SessionSignal) -> Screen {
        self.move_to(on_session_signal(self.screen, signal))
    }

    /// Apply a navigation request and return the resulting screen.
    pub fn navigate(&mut self, target: NavTarget, session: &SessionState) -> Screen {
        self.move_to(on_navigate(self.screen, target, session))
    }

    fn move_to(&mut self, next: Screen) -> Screen {
        if next != self.screen {
            tracing::debug!("screen {} -> {}", self.screen.as_str(), next.as_str());
            self.screen = next;
        }
        self.screen
    }
}
