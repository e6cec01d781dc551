//! Intent handlers for the App.

use crate::error::BlogResult;

use super::types::{Intent, NavTarget, Outcome, SessionSignal};
use super::App;

impl App {
    /// Apply one intent.
    ///
    /// Intents run to completion in the order they are dispatched. A failed
    /// intent leaves every store unchanged.
    pub fn dispatch(&mut self, intent: Intent) -> BlogResult<Outcome> {
        tracing::debug!("dispatch {}", intent.name());
        match intent {
            Intent::Login(credentials) => {
                let user = self.session.login(&credentials)?;
                self.coordinator.on_session(SessionSignal::SignedIn);
                Ok(Outcome::SignedIn(user))
            }
            Intent::Register(profile) => {
                let user = self.session.register(profile)?;
                self.coordinator.on_session(SessionSignal::SignedIn);
                Ok(Outcome::SignedIn(user))
            }
            Intent::Logout => {
                self.session.logout();
                self.expanded_post = None;
                self.coordinator.on_session(SessionSignal::SignedOut);
                Ok(Outcome::SignedOut)
            }
            Intent::Search(term) => {
                self.content.set_search_term(term);
                Ok(Outcome::SearchUpdated)
            }
            Intent::CreatePost {
                title,
                content,
                tags,
            } => self.handle_create_post(&title, &content, &tags),
            Intent::CreateComment { post_id, content } => {
                let author = self.session.require_user()?.clone();
                let comment_id = self.content.create_comment(&post_id, &content, &author)?;
                Ok(Outcome::CommentCreated { comment_id })
            }
            Intent::ToggleLike(post_id) => Ok(Outcome::LikeToggled {
                found: self.content.toggle_like(&post_id),
            }),
            Intent::ToggleCommentLike(comment_id) => Ok(Outcome::LikeToggled {
                found: self.content.toggle_comment_like(&comment_id),
            }),
            Intent::ToggleComments(post_id) => {
                self.toggle_comments(post_id);
                Ok(Outcome::CommentsToggled {
                    expanded: self.expanded_post.clone(),
                })
            }
            Intent::Navigate(target) => {
                let screen = self.coordinator.navigate(target, self.session.state());
                Ok(Outcome::Navigated(screen))
            }
        }
    }

    fn handle_create_post(
        &mut self,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> BlogResult<Outcome> {
        let author = self.session.require_user()?.clone();
        let post_id = self.content.create_post(title, content, tags, &author)?;
        self.coordinator
            .navigate(NavTarget::Published, self.session.state());
        Ok(Outcome::PostCreated { post_id })
    }

    /// Open the comment section of `post_id`, or close it if it is already open.
    fn toggle_comments(&mut self, post_id: String) {
        if self.expanded_post.as_deref() == Some(post_id.as_str()) {
            self.expanded_post = None;
        } else {
            self.expanded_post = Some(post_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::DEMO_SECRET;
    use crate::app::Screen;
    use crate::config::AppConfig;
    use crate::error::{AuthError, BlogError, Field};
    use crate::models::{Credentials, Profile};

    const BODY: &str = "A post body that easily clears the fifty character minimum length.";

    async fn booted() -> App {
        let mut app = App::in_memory(AppConfig::default().with_load_delay(Duration::ZERO));
        app.bootstrap().await.unwrap();
        app
    }

    #[tokio::test]
    async fn test_bootstrap_lands_on_auth() {
        let app = booted().await;

        assert_eq!(app.screen(), Screen::AuthRequired);
        assert!(!app.content.is_loading());
    }

    #[tokio::test]
    async fn test_login_moves_to_home() {
        let mut app = booted().await;
        let outcome = app
            .dispatch(Intent::Login(Credentials::new("johndoe", DEMO_SECRET)))
            .unwrap();

        assert!(matches!(outcome, Outcome::SignedIn(ref u) if u.username == "johndoe"));
        assert_eq!(app.screen(), Screen::Home);
    }

    #[tokio::test]
    async fn test_failed_login_stays_on_auth() {
        let mut app = booted().await;
        let err = app
            .dispatch(Intent::Login(Credentials::new("johndoe", "bad")))
            .unwrap_err();

        assert!(matches!(err, BlogError::Auth(AuthError::InvalidCredentials)));
        assert_eq!(app.screen(), Screen::AuthRequired);
    }

    #[tokio::test]
    async fn test_sign_in_before_bootstrap_is_rejected() {
        let mut app = App::in_memory(AppConfig::default().with_load_delay(Duration::ZERO));

        let err = app
            .dispatch(Intent::Login(Credentials::new("johndoe", DEMO_SECRET)))
            .unwrap_err();
        assert!(matches!(err, BlogError::Auth(AuthError::SessionLoading)));
        let err = app
            .dispatch(Intent::Register(Profile::new("alice", "alice@example.com")))
            .unwrap_err();
        assert!(matches!(err, BlogError::Auth(AuthError::SessionLoading)));
        assert_eq!(app.screen(), Screen::Loading);

        app.bootstrap().await.unwrap();
        assert_eq!(app.screen(), Screen::AuthRequired);

        app.dispatch(Intent::Login(Credentials::new("johndoe", DEMO_SECRET)))
            .unwrap();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_create_post_requires_user() {
        let mut app = booted().await;
        let err = app
            .dispatch(Intent::CreatePost {
                title: "Title".into(),
                content: BODY.into(),
                tags: vec![],
            })
            .unwrap_err();

        assert!(matches!(err, BlogError::Auth(AuthError::NotAuthenticated)));
        assert_eq!(app.content.post_count(), 2);
    }

    #[tokio::test]
    async fn test_publish_returns_home() {
        let mut app = booted().await;
        app.dispatch(Intent::Register(Profile::new("alice", "alice@example.com")))
            .unwrap();
        app.dispatch(Intent::Navigate(NavTarget::Create)).unwrap();
        assert_eq!(app.screen(), Screen::ComposeNewPost);

        let outcome = app
            .dispatch(Intent::CreatePost {
                title: "Hello world".into(),
                content: BODY.into(),
                tags: vec!["intro".into()],
            })
            .unwrap();

        let Outcome::PostCreated { post_id } = outcome else {
            panic!("expected PostCreated");
        };
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(app.content.posts()[0].id, post_id);
        assert_eq!(app.content.posts()[0].author.username, "alice");
    }

    #[tokio::test]
    async fn test_invalid_post_stays_on_compose() {
        let mut app = booted().await;
        app.dispatch(Intent::Register(Profile::new("alice", "alice@example.com")))
            .unwrap();
        app.dispatch(Intent::Navigate(NavTarget::Create)).unwrap();

        let err = app
            .dispatch(Intent::CreatePost {
                title: "Hi".into(),
                content: "short".into(),
                tags: vec![],
            })
            .unwrap_err();

        assert_eq!(err.fields(), vec![Field::Title, Field::Content]);
        assert_eq!(app.screen(), Screen::ComposeNewPost);
        assert_eq!(app.content.post_count(), 2);
    }

    #[tokio::test]
    async fn test_toggle_comments_expands_and_collapses() {
        let mut app = booted().await;

        let outcome = app.dispatch(Intent::ToggleComments("1".into())).unwrap();
        assert_eq!(outcome, Outcome::CommentsToggled { expanded: Some("1".into()) });
        assert_eq!(app.view().expanded_comments.len(), 2);

        let outcome = app.dispatch(Intent::ToggleComments("1".into())).unwrap();
        assert_eq!(outcome, Outcome::CommentsToggled { expanded: None });
        assert!(app.view().expanded_comments.is_empty());
    }

    #[tokio::test]
    async fn test_logout_collapses_and_returns_to_auth() {
        let mut app = booted().await;
        app.dispatch(Intent::Register(Profile::new("alice", "alice@example.com")))
            .unwrap();
        app.dispatch(Intent::ToggleComments("1".into())).unwrap();

        app.dispatch(Intent::Logout).unwrap();

        assert_eq!(app.screen(), Screen::AuthRequired);
        assert!(app.view().expanded_post.is_none());
        // Idempotent
        assert_eq!(app.dispatch(Intent::Logout).unwrap(), Outcome::SignedOut);
    }

    #[tokio::test]
    async fn test_unknown_like_reports_not_found() {
        let mut app = booted().await;
        let outcome = app.dispatch(Intent::ToggleLike("999".into())).unwrap();

        assert_eq!(outcome, Outcome::LikeToggled { found: false });
    }
}
