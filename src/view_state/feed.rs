//! Home feed status.

/// What the home feed area should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// Initial posts have not arrived yet
    Loading,
    /// Nothing to show
    Empty {
        /// Explanation for the empty feed
        message: String,
        /// Whether to offer a "create your first post" action
        offer_create: bool,
    },
    /// `count` posts to render
    Ready { count: usize },
}

impl FeedStatus {
    /// Decide the feed status from the load flag, visible post count and search term.
    pub fn derive(loading: bool, visible: usize, search_term: &str) -> Self {
        if loading {
            return FeedStatus::Loading;
        }
        if visible > 0 {
            return FeedStatus::Ready { count: visible };
        }
        if search_term.is_empty() {
            FeedStatus::Empty {
                message: "Be the first to share something amazing!".to_string(),
                offer_create: true,
            }
        } else {
            FeedStatus::Empty {
                message: format!("No posts match your search for \"{}\"", search_term),
                offer_create: false,
            }
        }
    }
}
