mod links;

use crate::configuration::Settings;
use crate::report_directory::{dated_directory, read_report_batch, report_date_of};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use regex::Regex;
use shared_kernel::http_client::HttpClient;
use std::path::{Path, PathBuf};
use url::Url;
use use_cases::build_reports::{DocumentSource, ReportBatch};

pub use links::{file_name_of, PdfLinks};

const PARTIAL_SUFFIX: &str = ".part";

/// Scrapes the listing page and downloads reports that are not on disk yet
/// into `<raw_directory>/<report date>/`.
pub struct WebPageReader {
    listing_url: Url,
    links: PdfLinks,
    raw_directory: PathBuf,
}

impl WebPageReader {
    pub fn new(listing_url: Url, links: PdfLinks, raw_directory: impl Into<PathBuf>) -> Self {
        Self {
            listing_url,
            links,
            raw_directory: raw_directory.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let links = match &settings.source.link_pattern {
            Some(pattern) => PdfLinks::new(
                Regex::new(pattern).with_context(|| format!("Invalid link pattern {pattern}"))?,
            ),
            None => PdfLinks::default(),
        };
        Ok(Self::new(
            settings.source.listing_url.clone(),
            links,
            &settings.data.raw_directory,
        ))
    }

    async fn download(&self, url: Url, directory: &Path) -> anyhow::Result<PathBuf> {
        let file_name = file_name_of(&url)?;
        let destination = directory.join(file_name);
        let bytes = HttpClient::get_bytes(url.clone()).await?;
        save_file(&destination, &bytes)
            .await
            .with_context(|| format!("Failed to save {url}"))?;
        tracing::info!("Downloaded {url}");
        Ok(destination)
    }
}

/// Writes next to `destination` first so an interrupted write never leaves a
/// truncated report under its final name.
async fn save_file(destination: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let mut partial = destination.as_os_str().to_owned();
    partial.push(PARTIAL_SUFFIX);
    let partial = PathBuf::from(partial);

    tokio::fs::write(&partial, contents)
        .await
        .with_context(|| format!("Failed to write {}", partial.display()))?;
    tokio::fs::rename(&partial, destination)
        .await
        .with_context(|| format!("Failed to move {} into place", partial.display()))
}

#[async_trait]
impl DocumentSource for WebPageReader {
    #[tracing::instrument(err, skip(self), fields(listing_url = %self.listing_url), level = "info")]
    async fn list_new_documents(&self) -> anyhow::Result<Option<ReportBatch>> {
        let page_content = HttpClient::get_text(self.listing_url.clone()).await?;
        let urls = self.links.find(&page_content)?;
        let first_link = urls
            .first()
            .ok_or_else(|| anyhow!("No report links found on {}", self.listing_url))?;
        let report_date = report_date_of(file_name_of(first_link)?)?;

        let directory = dated_directory(&self.raw_directory, report_date);
        tokio::fs::create_dir_all(&directory)
            .await
            .with_context(|| format!("Failed to create {}", directory.display()))?;

        let mut new_urls = vec![];
        for url in urls {
            let already_downloaded = tokio::fs::try_exists(directory.join(file_name_of(&url)?))
                .await
                .unwrap_or(false);
            if !already_downloaded {
                new_urls.push(url);
            }
        }

        if new_urls.is_empty() {
            tracing::info!("No new files for {report_date}");
            return Ok(None);
        }

        let mut downloads: FuturesUnordered<_> = new_urls
            .into_iter()
            .map(|url| self.download(url, &directory))
            .collect();

        let mut errors = vec![];
        let mut downloaded = 0;
        while let Some(result) = downloads.next().await {
            match result {
                Ok(_) => downloaded += 1,
                Err(error) => errors.push(error),
            }
        }

        if !errors.is_empty() {
            tracing::error!("{errors:?}")
        }
        if downloaded == 0 {
            return Err(anyhow!("{errors:?}"));
        }

        read_report_batch(&directory, report_date).await.map(Some)
    }
}
