use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// GitHub user profile from the `/users/{handle}` API.
///
/// The stat counters default to zero when the provider omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

/// Repository entry from `/users/{handle}/repos`, delivered most recently
/// updated first. That order is never re-sorted.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub updated_at: DateTime<Utc>,
}

/// Public activity event from `/users/{handle}/events/public`.
///
/// Only the timestamp is consumed. It stays a raw string so one bad value
/// skips a single event during aggregation instead of failing the page.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicEvent {
    #[serde(default)]
    pub created_at: String,
}

/// Pre-aggregated contribution day from the alternate provider, level 0-4
/// already assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

/// Envelope of the alternate provider's `?y=last` response.
#[derive(Debug, Deserialize)]
pub struct ContributionsResponse {
    #[serde(default)]
    pub contributions: Vec<ContributionDay>,
}
