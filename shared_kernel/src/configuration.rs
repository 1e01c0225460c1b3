use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const CONFIGURATION_DIRECTORY_VARIABLE: &str = "APP_CONFIGURATION_DIRECTORY";

/// Loads `base.yaml` (`test.yaml` under test) from the configuration directory and
/// layers `APP_`-prefixed environment variables on top, eg: `APP_DATA__RAW_DIRECTORY`.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let configuration_directory = configuration_directory()?;
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    config_from(&configuration_directory.join(file))
}

pub fn config_from<Settings: DeserializeOwned>(file: &Path) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::from(file))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build configuration from {}", file.display()))?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}

fn configuration_directory() -> anyhow::Result<PathBuf> {
    if let Ok(directory) = std::env::var(CONFIGURATION_DIRECTORY_VARIABLE) {
        return Ok(PathBuf::from(directory));
    }
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    Ok(base_path.join("configuration"))
}
