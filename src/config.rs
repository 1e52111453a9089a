// src/config.rs
use std::path::PathBuf;

pub const FIXTURES_PATH_ENV: &str = "ASSET_FIXTURES_PATH";

/// Where fixture sets are read from. Without a path the default genesis
/// fixtures are used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureConfig {
    pub path: Option<PathBuf>,
}

impl FixtureConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let path = std::env::var_os(FIXTURES_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { path }
    }
}
