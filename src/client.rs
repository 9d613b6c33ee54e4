use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::PortfolioConfig;
use crate::error::FetchError;
use crate::models::{ContributionDay, ContributionsResponse, PublicEvent, Repository, UserProfile};

/// Repositories and events are both requested at the provider's page cap.
pub const PER_PAGE: u32 = 100;

/// Creates a preconfigured HTTP client with required headers.
pub fn build_client() -> Result<Client, FetchError> {
    use reqwest::header::{HeaderMap, HeaderValue};

    let mut headers = HeaderMap::new();
    headers.insert("User-Agent", HeaderValue::from_static("gitfolio"));
    headers.insert("Accept", HeaderValue::from_static("application/vnd.github.v3+json"));

    Ok(Client::builder().default_headers(headers).build()?)
}

/// Fetches the profile record for the configured handle.
pub async fn fetch_profile(
    client: &Client,
    config: &PortfolioConfig,
) -> Result<UserProfile, FetchError> {
    get_json(client, &profile_url(config)).await
}

/// Fetches the repository list, most recently updated first.
pub async fn fetch_repositories(
    client: &Client,
    config: &PortfolioConfig,
) -> Result<Vec<Repository>, FetchError> {
    get_json(client, &repositories_url(config)).await
}

/// Fetches one page of the public activity feed. Pages start at 1.
pub async fn fetch_event_page(
    client: &Client,
    config: &PortfolioConfig,
    page: u32,
) -> Result<Vec<PublicEvent>, FetchError> {
    get_json(client, &events_url(config, page)).await
}

/// Fetches the alternate provider's pre-aggregated "last year" day list.
pub async fn fetch_contribution_days(
    client: &Client,
    config: &PortfolioConfig,
) -> Result<Vec<ContributionDay>, FetchError> {
    let response: ContributionsResponse = get_json(client, &contributions_url(config)).await?;
    Ok(response.contributions)
}

/// GETs a URL and decodes the JSON body.
///
/// A non-success status is reported before the body is touched, so a remote
/// error page never shows up as a parse failure.
async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Remote {
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn profile_url(config: &PortfolioConfig) -> String {
    format!("{}/users/{}", config.api_base, config.handle)
}

fn repositories_url(config: &PortfolioConfig) -> String {
    format!(
        "{}/users/{}/repos?sort=updated&per_page={PER_PAGE}",
        config.api_base, config.handle
    )
}

fn events_url(config: &PortfolioConfig, page: u32) -> String {
    format!(
        "{}/users/{}/events/public?per_page={PER_PAGE}&page={page}",
        config.api_base, config.handle
    )
}

fn contributions_url(config: &PortfolioConfig) -> String {
    format!(
        "{}/{}?y=last",
        config.contributions_api_base, config.handle
    )
}
