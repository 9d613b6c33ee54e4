//! gitfolio - data layer for a GitHub-backed personal portfolio page
//!
//! Fetches a fixed account's public data and shapes it into the three widget
//! payloads the page renders: a profile summary, a grid of repository cards,
//! and a one-year contribution heatmap. Rendering lives outside this crate;
//! everything here is fetch-then-shape, with each widget load isolated so one
//! failure never blanks the page.
//!
//! ## Modules
//!
//! - **client**: preconfigured HTTP client and the per-endpoint fetches
//! - **heatmap**: trailing-window aggregation and week-aligned grid layout
//! - **cards** / **profile**: pure record-to-descriptor shaping
//! - **portfolio**: startup orchestration with per-widget failure isolation

pub mod cards;
pub mod client;
pub mod config;
pub mod error;
pub mod heatmap;
pub mod models;
pub mod portfolio;
pub mod profile;
pub mod relative_time;

pub use cards::{RepoCard, RepoSection};
pub use config::{LanguageColors, PortfolioConfig};
pub use error::FetchError;
pub use heatmap::{DayActivity, HeatmapGrid, MonthLabel};
pub use portfolio::{load_portfolio, Portfolio};
pub use profile::ProfileSummary;
pub use relative_time::relative_time;
