//! Configuration passed explicitly to the client and builders.

use std::collections::HashMap;

/// GitHub REST endpoint root.
pub const GITHUB_API: &str = "https://api.github.com";

/// Mirror serving the provider's own pre-aggregated contribution days.
pub const CONTRIBUTIONS_API: &str = "https://github-contributions-api.jogruber.de/v4";

/// Color used for languages missing from the table.
pub const FALLBACK_LANGUAGE_COLOR: &str = "#8b949e";

/// Language → display color, the linguist palette for the languages the
/// portfolio is likely to show.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3572A5"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Rust", "#dea584"),
    ("Go", "#00ADD8"),
    ("Java", "#b07219"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("Shell", "#89e051"),
    ("Vue", "#41b883"),
    ("Svelte", "#ff3e00"),
    ("Kotlin", "#A97BFF"),
    ("Swift", "#fa7343"),
    ("Dart", "#00B4AB"),
];

/// Language color lookup with a fixed fallback.
#[derive(Debug, Clone)]
pub struct LanguageColors {
    colors: HashMap<String, String>,
    fallback: String,
}

impl Default for LanguageColors {
    fn default() -> Self {
        let colors = LANGUAGE_COLORS
            .iter()
            .map(|(language, color)| (language.to_string(), color.to_string()))
            .collect();
        Self {
            colors,
            fallback: FALLBACK_LANGUAGE_COLOR.to_string(),
        }
    }
}

impl LanguageColors {
    /// Resolves a language name to its display color.
    pub fn color_of(&self, language: &str) -> &str {
        self.colors
            .get(language)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Adds or replaces a table entry.
    pub fn insert(&mut self, language: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(language.into(), color.into());
    }
}

/// Everything the builders need for one page load. Constructed explicitly
/// and handed down; nothing reads ambient state.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Fixed account handle the page is built for.
    pub handle: String,
    /// REST endpoint root, overridable for tests.
    pub api_base: String,
    /// Alternate pre-aggregated contributions endpoint root.
    pub contributions_api_base: String,
    pub colors: LanguageColors,
}

impl PortfolioConfig {
    /// Configuration for `handle` against the public endpoints.
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            api_base: GITHUB_API.to_string(),
            contributions_api_base: CONTRIBUTIONS_API.to_string(),
            colors: LanguageColors::default(),
        }
    }
}
