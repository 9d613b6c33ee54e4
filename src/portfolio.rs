//! Startup orchestration: three widget loads, isolated from each other.

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, warn};

use crate::cards::{self, RepoSection};
use crate::client;
use crate::config::PortfolioConfig;
use crate::error::FetchError;
use crate::heatmap::{self, HeatmapGrid};
use crate::models::PublicEvent;
use crate::profile::{self, ProfileSummary};

/// Fixed fan-out width for the public-event feed: the provider serves at
/// most 300 events, three pages at the 100-item cap.
pub const EVENT_PAGES: u32 = 3;

/// Fallback notice when the repository list cannot be loaded at all.
pub const REPOSITORIES_UNAVAILABLE: &str =
    "Could not load repositories. Please try again later.";

/// The three widget payloads handed to the renderer. An absent widget failed
/// to load and renders as its fallback state.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Option<ProfileSummary>,
    pub repositories: RepoSection,
    pub heatmap: Option<HeatmapGrid>,
}

/// Loads all three widgets concurrently.
///
/// Each load is isolated: a failure is logged and replaced with that
/// widget's fallback, never propagated, so one widget failing cannot keep
/// the other two off the page.
pub async fn load_portfolio(
    client: &Client,
    config: &PortfolioConfig,
    now: DateTime<Utc>,
) -> Portfolio {
    let (profile, repositories, heatmap) = tokio::join!(
        load_profile(client, config),
        load_repositories(client, config, now),
        load_heatmap(client, config, now),
    );

    Portfolio {
        profile,
        repositories,
        heatmap,
    }
}

async fn load_profile(client: &Client, config: &PortfolioConfig) -> Option<ProfileSummary> {
    match client::fetch_profile(client, config).await {
        Ok(user) => Some(profile::summarize(&user)),
        Err(err) => {
            warn!(%err, "profile load failed");
            None
        }
    }
}

async fn load_repositories(
    client: &Client,
    config: &PortfolioConfig,
    now: DateTime<Utc>,
) -> RepoSection {
    match client::fetch_repositories(client, config).await {
        Ok(repos) => cards::build_cards(&repos, &config.colors, now),
        Err(err) => {
            warn!(%err, "repository load failed");
            RepoSection::Notice(REPOSITORIES_UNAVAILABLE.to_string())
        }
    }
}

async fn load_heatmap(
    client: &Client,
    config: &PortfolioConfig,
    now: DateTime<Utc>,
) -> Option<HeatmapGrid> {
    let pages = fetch_event_pages(client, config).await;
    let events = merge_pages(pages);
    heatmap::from_events(&events, now.date_naive())
}

/// Fetches the event pages concurrently, one task per page.
async fn fetch_event_pages(
    client: &Client,
    config: &PortfolioConfig,
) -> Vec<Result<Vec<PublicEvent>, FetchError>> {
    let mut handles = Vec::new();
    for page in 1..=EVENT_PAGES {
        let client = client.clone();
        let config = config.clone();
        handles.push(tokio::spawn(async move {
            client::fetch_event_page(&client, &config, page).await
        }));
    }

    let mut pages = Vec::new();
    for handle in handles {
        // A panicked task degrades the same way a failed page does.
        pages.push(handle.await.unwrap_or_else(|_| Ok(Vec::new())));
    }
    pages
}

/// Flattens page results, substituting an empty page for each failure.
fn merge_pages(pages: Vec<Result<Vec<PublicEvent>, FetchError>>) -> Vec<PublicEvent> {
    let mut events = Vec::new();
    for (index, result) in pages.into_iter().enumerate() {
        match result {
            Ok(page) => events.extend(page),
            Err(err) => debug!(page = index + 1, %err, "event page degraded to empty"),
        }
    }
    events
}
