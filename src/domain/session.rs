//! Session state management.
//!
//! This module provides [`SessionStore`], which tracks whether someone is
//! signed in and who they are. Sign-in checks a [`UserDirectory`]; there is
//! no real authentication behind it.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

use crate::config::AppConfig;
use crate::error::{require_text, AuthError, BlogError, BlogResult, Field, ValidationError};
use crate::models::{Credentials, Profile, User};
use crate::traits::UserDirectory;

/// Exactly one of loading, signed out, or signed in as a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Existing-session check still running
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Flattened, serializable view of the session for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            user: state.user().cloned(),
            is_authenticated: state.is_authenticated(),
            is_loading: state.is_loading(),
        }
    }
}

/// Authentication state plus the directory used to check credentials.
pub struct SessionStore {
    state: SessionState,
    directory: Arc<dyn UserDirectory>,
    /// Simulated delay of the existing-session check
    init_delay: Duration,
    updates: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Create a store in the loading state.
    pub fn new(directory: Arc<dyn UserDirectory>, config: &AppConfig) -> Self {
        let state = SessionState::default();
        let (updates, _) = watch::channel(SessionSnapshot::from(&state));
        Self {
            state,
            directory,
            init_delay: config.session_delay,
            updates,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&self.state)
    }

    /// Register for session changes; the receiver always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    /// The signed-in user, or [`AuthError::NotAuthenticated`].
    pub fn require_user(&self) -> Result<&User, AuthError> {
        self.state.user().ok_or(AuthError::NotAuthenticated)
    }

    /// Check for an existing session.
    ///
    /// Enters the loading state, waits the configured delay once, then
    /// resolves to signed out. There is no stored session to restore.
    pub async fn initialize(&mut self) {
        self.set_state(SessionState::Loading);
        if !self.init_delay.is_zero() {
            tokio::time::sleep(self.init_delay).await;
        }
        tracing::info!("session check finished: no existing session");
        self.set_state(SessionState::Unauthenticated);
    }

    /// Sign in against the directory.
    ///
    /// Both fields must be non-blank; every blank field is reported. Rejected
    /// with [`AuthError::SessionLoading`] until [`initialize`](Self::initialize)
    /// has finished. On a mismatch the session is left as it was and
    /// [`AuthError::InvalidCredentials`] is returned.
    pub fn login(&mut self, credentials: &Credentials) -> BlogResult<User> {
        self.ensure_ready()?;

        let identifier = require_text(Field::Identifier, &credentials.identifier, 1).err();
        let secret = credentials
            .secret
            .is_empty()
            .then(|| ValidationError::empty(Field::Secret));
        if identifier.is_some() || secret.is_some() {
            let errs = identifier.into_iter().chain(secret).collect();
            return Err(BlogError::Validation(errs));
        }

        let Some(user) = self.directory.authenticate(credentials) else {
            tracing::info!("login rejected for {:?}", credentials.identifier.trim());
            return Err(AuthError::InvalidCredentials.into());
        };

        tracing::info!("signed in as {}", user.username);
        self.set_state(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Create a user from `profile` and sign in as them.
    ///
    /// Only fails while the existing-session check is still running.
    pub fn register(&mut self, profile: Profile) -> Result<User, AuthError> {
        self.ensure_ready()?;

        let user = User::from_profile(profile);
        tracing::info!("registered and signed in as {} ({})", user.username, user.id);
        self.set_state(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Sign out. Returns `false` when nobody was signed in.
    pub fn logout(&mut self) -> bool {
        if !self.state.is_authenticated() {
            return false;
        }
        tracing::info!("signed out");
        self.set_state(SessionState::Unauthenticated);
        true
    }

    fn ensure_ready(&self) -> Result<(), AuthError> {
        if self.state.is_loading() {
            tracing::warn!("sign-in ignored: session check still running");
            return Err(AuthError::SessionLoading);
        }
        Ok(())
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.updates.send_replace(SessionSnapshot::from(&self.state));
    }
}
