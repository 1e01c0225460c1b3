use serde::Deserialize;
use shared_kernel::configuration::config;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Settings {
    data: DataSettings,
}

#[derive(Debug, Deserialize)]
pub struct DataSettings {
    processed_directory: PathBuf,
}

impl Settings {
    fn parse() -> anyhow::Result<Self> {
        config::<Settings>()
    }

    pub fn processed_directory() -> anyhow::Result<PathBuf> {
        Ok(Self::parse()?.data.processed_directory)
    }
}
