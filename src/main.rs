use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use quill::adapters::DEMO_SECRET;
use quill::app::{App, Intent};
use quill::config::AppConfig;
use quill::models::text_utils::format_long_date;
use quill::models::Credentials;
use quill::view_state::FeedStatus;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("quill {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quill=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut app = App::in_memory(AppConfig::from_env());
    if let Err(e) = app.bootstrap().await {
        tracing::error!("[{}] startup failed: {}", e.error_code(), e);
        eprintln!("{} {}", e.user_message(), e.recovery_hint());
        return Err(e.into());
    }
    tracing::info!("screen after startup: {}", app.screen().as_str());

    app.dispatch(Intent::Login(Credentials::new("johndoe", DEMO_SECRET)))?;

    let view = app.view();
    if let Some(welcome) = view.welcome() {
        println!("{}", welcome);
    }
    match &view.feed {
        FeedStatus::Loading => println!("Loading posts..."),
        FeedStatus::Empty { message, .. } => println!("{}", message),
        FeedStatus::Ready { count } => {
            println!("{} posts\n", count);
            for post in &view.posts {
                println!("{}", post.title);
                println!(
                    "  by {} on {} | {} likes",
                    post.author.username,
                    format_long_date(post.created_at),
                    post.likes
                );
                println!("  {}\n", post.excerpt);
            }
        }
    }

    Ok(())
}
