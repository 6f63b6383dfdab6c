pub mod aggregate;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod overrides;
pub mod taxonomy;

pub use aggregate::{Aggregator, Portfolio};
pub use config::{Config, Language};
pub use error::{Error, Result};
pub use github::{GitHubClient, RepoSource};
pub use overrides::OverrideConfig;
