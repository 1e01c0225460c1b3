use anyhow::{anyhow, Context};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use use_cases::build_reports::{DocumentSource, MobilityDocument, ReportBatch};

const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";
const REPORT_DATE_LENGTH: usize = 10;

/// Parses the `YYYY-MM-DD` prefix of a report file or directory name.
pub fn report_date_of(name: &str) -> anyhow::Result<NaiveDate> {
    let prefix = name
        .get(..REPORT_DATE_LENGTH)
        .ok_or_else(|| anyhow!("{name} does not start with a report date"))?;
    NaiveDate::parse_from_str(prefix, REPORT_DATE_FORMAT)
        .with_context(|| format!("{name} does not start with a report date"))
}

pub(crate) fn dated_directory(root: &Path, report_date: NaiveDate) -> PathBuf {
    root.join(report_date.format(REPORT_DATE_FORMAT).to_string())
}

/// Every pdf in `directory`, in file name order.
pub(crate) async fn read_report_batch(
    directory: &Path,
    report_date: NaiveDate,
) -> anyhow::Result<ReportBatch> {
    let mut entries = tokio::fs::read_dir(directory)
        .await
        .with_context(|| format!("Failed to read {}", directory.display()))?;

    let mut documents = vec![];
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .map(|extension| extension.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && entry.file_type().await?.is_file() {
            documents.push(MobilityDocument::new(path));
        }
    }
    documents.sort();

    Ok(ReportBatch::new(report_date, documents))
}

/// An already downloaded dated directory, eg: `data/raw/2020-03-29`.
/// Used to rebuild the reports without touching the network.
pub struct ReportDirectory {
    directory: PathBuf,
}

impl ReportDirectory {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for ReportDirectory {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn list_new_documents(&self) -> anyhow::Result<Option<ReportBatch>> {
        let directory_name = self
            .directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("{} has no directory name", self.directory.display()))?;
        let report_date = report_date_of(&directory_name)?;

        let batch = read_report_batch(&self.directory, report_date).await?;
        if batch.documents.is_empty() {
            tracing::warn!("No reports found in {}", self.directory.display());
            return Ok(None);
        }
        Ok(Some(batch))
    }
}
