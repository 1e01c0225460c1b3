use anyhow::Context;
use serde::Deserialize;
use shared_kernel::configuration::config;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub listing_url: Url,
    /// Overrides the regex used to find report links on the listing page.
    #[serde(default)]
    pub link_pattern: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub raw_directory: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub source: SourceSettings,
    pub data: DataSettings,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Settings> {
        config::<Settings>().context("Failed to deserialize the report source settings")
    }
}
