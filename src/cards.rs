//! Repository card shaping for the projects grid.

use chrono::{DateTime, Utc};

use crate::config::LanguageColors;
use crate::models::Repository;
use crate::relative_time::relative_time;

/// Placeholder shown when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Label shown when the provider reports no primary language.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Empty-state notice for an account with no public repositories.
pub const NO_REPOSITORIES: &str = "No public repositories found.";

/// Everything the renderer needs for one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCard {
    pub name: String,
    pub url: String,
    pub description: String,
    pub language: String,
    pub language_color: String,
    pub stars: u32,
    /// Relative age of the last update, e.g. `"3d ago"`.
    pub updated: String,
}

/// The repositories widget: either cards in provider order, or a single
/// user-visible notice the renderer shows instead of an empty container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSection {
    Cards(Vec<RepoCard>),
    Notice(String),
}

/// Maps one repository record to its card descriptor.
pub fn build_card(repo: &Repository, colors: &LanguageColors, now: DateTime<Utc>) -> RepoCard {
    let language = repo
        .language
        .clone()
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

    RepoCard {
        name: repo.name.clone(),
        url: repo.html_url.clone(),
        description: repo
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        language_color: colors.color_of(&language).to_string(),
        language,
        stars: repo.stargazers_count,
        updated: relative_time(repo.updated_at, now),
    }
}

/// Builds the card list in input order, or the empty-state notice.
pub fn build_cards(repos: &[Repository], colors: &LanguageColors, now: DateTime<Utc>) -> RepoSection {
    if repos.is_empty() {
        return RepoSection::Notice(NO_REPOSITORIES.to_string());
    }
    RepoSection::Cards(
        repos
            .iter()
            .map(|repo| build_card(repo, colors, now))
            .collect(),
    )
}
