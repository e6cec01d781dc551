//! Integration tests for screen selection.

mod common;

use common::{booted_app, test_config};
use quill::adapters::DEMO_SECRET;
use quill::app::navigation::{on_navigate, on_session_signal};
use quill::app::{App, Intent, NavTarget, Outcome, Screen, SessionSignal};
use quill::domain::SessionState;
use quill::models::{Credentials, Profile, User};

#[test]
fn test_app_starts_on_loading_screen() {
    let app = App::in_memory(test_config());

    assert_eq!(app.screen(), Screen::Loading);
    assert!(app.session.is_loading());
}

#[tokio::test]
async fn test_navigation_ignored_before_session_check() {
    let mut app = App::in_memory(test_config());

    let outcome = app.dispatch(Intent::Navigate(NavTarget::Create)).unwrap();

    assert_eq!(outcome, Outcome::Navigated(Screen::Loading));
}

#[tokio::test]
async fn test_signed_out_create_lands_on_auth() {
    let mut app = booted_app().await;

    let outcome = app.dispatch(Intent::Navigate(NavTarget::Create)).unwrap();

    assert_eq!(outcome, Outcome::Navigated(Screen::AuthRequired));
}

#[tokio::test]
async fn test_compose_then_cancel() {
    let mut app = booted_app().await;
    app.dispatch(Intent::Login(Credentials::new("johndoe", DEMO_SECRET)))
        .unwrap();

    app.dispatch(Intent::Navigate(NavTarget::Create)).unwrap();
    assert_eq!(app.screen(), Screen::ComposeNewPost);

    app.dispatch(Intent::Navigate(NavTarget::Cancel)).unwrap();
    assert_eq!(app.screen(), Screen::Home);
}

#[tokio::test]
async fn test_logout_from_compose_returns_to_auth() {
    let mut app = booted_app().await;
    app.dispatch(Intent::Register(Profile::new("alice", "alice@example.com")))
        .unwrap();
    app.dispatch(Intent::Navigate(NavTarget::Create)).unwrap();

    app.dispatch(Intent::Logout).unwrap();

    assert_eq!(app.screen(), Screen::AuthRequired);
}

#[test]
fn test_sign_in_keeps_compose_screen() {
    assert_eq!(
        on_session_signal(Screen::ComposeNewPost, SessionSignal::SignedIn),
        Screen::ComposeNewPost
    );
    assert_eq!(
        on_session_signal(Screen::AuthRequired, SessionSignal::SignedIn),
        Screen::Home
    );
}

#[test]
fn test_every_authenticated_target_guards_signed_out() {
    let signed_out = SessionState::Unauthenticated;
    for target in [NavTarget::Home, NavTarget::Create, NavTarget::Cancel, NavTarget::Published] {
        assert_eq!(
            on_navigate(Screen::AuthRequired, target, &signed_out),
            Screen::AuthRequired,
            "{:?}",
            target
        );
    }
}

#[test]
fn test_sign_in_target_always_allowed() {
    let user = User::from_profile(Profile::new("alice", "alice@example.com"));
    let signed_in = SessionState::Authenticated(user);

    assert_eq!(
        on_navigate(Screen::Home, NavTarget::SignIn, &signed_in),
        Screen::AuthRequired
    );
}
