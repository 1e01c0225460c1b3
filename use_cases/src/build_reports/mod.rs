mod contracts;
mod county_report;
mod documents;
mod failure_policy;
mod global_report;
mod region_report;
#[cfg(test)]
mod test_support;

pub use contracts::{DocumentSelection, DocumentSource, DocumentToText, TableExporter};
pub use county_report::CountyReport;
pub use documents::{Destination, MobilityDocument, ReportBatch};
pub use failure_policy::FailurePolicy;
pub use global_report::GlobalReport;
pub use region_report::RegionReport;

use anyhow::bail;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

#[async_trait]
pub trait ReportBuilder: Send + Sync {
    fn name(&self) -> &'static str;
    async fn build(&self, batch: &ReportBatch) -> anyhow::Result<()>;
}

/// Builds the county, global and per-region reports of a batch.
pub struct BuildReports {
    builders: Vec<Arc<dyn ReportBuilder>>,
}

impl BuildReports {
    pub fn new(
        document_to_text: Arc<dyn DocumentToText>,
        exporter: Arc<dyn TableExporter>,
        selection: Arc<dyn DocumentSelection>,
    ) -> Self {
        let county = CountyReport::new(
            document_to_text.clone(),
            exporter.clone(),
            selection.clone(),
        );
        let global = GlobalReport::new(
            document_to_text.clone(),
            exporter.clone(),
            selection.clone(),
        );
        let region = RegionReport::new(document_to_text, exporter, selection);
        Self::with_builders(vec![Arc::new(county), Arc::new(global), Arc::new(region)])
    }

    pub fn with_builders(builders: Vec<Arc<dyn ReportBuilder>>) -> Self {
        Self { builders }
    }

    /// Runs every report, a failing report does not stop the others.
    #[tracing::instrument(err, skip_all, fields(report_date = %batch.report_date), level = "info")]
    pub async fn run(&self, batch: &ReportBatch) -> anyhow::Result<()> {
        let mut errors = vec![];
        for builder in self.builders.iter() {
            info!("Building the {} report", builder.name());
            if let Err(err) = builder.build(batch).await {
                error!("The {} report failed: {err:?}", builder.name());
                errors.push((builder.name(), err));
            }
        }

        if !errors.is_empty() {
            bail!("{errors:?}")
        }
        Ok(())
    }

    /// Builds the reports only when the source has published something new.
    pub async fn run_for_new_documents(&self, source: &dyn DocumentSource) -> anyhow::Result<()> {
        match source.list_new_documents().await? {
            Some(batch) => {
                info!(
                    report_date = %batch.report_date,
                    documents = batch.documents.len(),
                    "New documents found"
                );
                self.run(&batch).await
            }
            None => {
                info!("No new documents");
                Ok(())
            }
        }
    }
}
