//! Profile summary shaping for the hero section.

use crate::models::UserProfile;

/// Fields the hero section renders: avatar plus three stat counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub avatar_url: String,
    pub display_name: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// Maps the provider record to renderable fields.
///
/// A missing or empty display name falls back to the account handle. Counts
/// the provider omitted already defaulted to zero at decode time. No error
/// paths of its own; failures belong to the fetch upstream.
pub fn summarize(user: &UserProfile) -> ProfileSummary {
    let display_name = user
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&user.login)
        .to_string();

    ProfileSummary {
        avatar_url: user.avatar_url.clone(),
        display_name,
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
    }
}
