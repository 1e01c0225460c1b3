use crate::build_reports::contracts::{DocumentSelection, DocumentToText, TableExporter};
use crate::build_reports::documents::{Destination, ReportBatch};
use crate::build_reports::failure_policy::{extract_documents, FailurePolicy};
use crate::build_reports::ReportBuilder;
use crate::tables::Table;
use async_trait::async_trait;
use mobility_report_parser::{extract_primary_region, RecordSet};
use std::sync::Arc;
use tracing::{info, warn};

/// One row per country, the USA included through its nationwide document.
pub struct GlobalReport {
    document_to_text: Arc<dyn DocumentToText>,
    exporter: Arc<dyn TableExporter>,
    selection: Arc<dyn DocumentSelection>,
    policy: FailurePolicy,
}

impl GlobalReport {
    pub const DESTINATION: &'static str = "World";

    pub fn new(
        document_to_text: Arc<dyn DocumentToText>,
        exporter: Arc<dyn TableExporter>,
        selection: Arc<dyn DocumentSelection>,
    ) -> Self {
        Self {
            document_to_text,
            exporter,
            selection,
            policy: FailurePolicy::Abort,
        }
    }

    pub fn with_failure_policy(self, policy: FailurePolicy) -> Self {
        Self { policy, ..self }
    }
}

#[async_trait]
impl ReportBuilder for GlobalReport {
    fn name(&self) -> &'static str {
        "global"
    }

    #[tracing::instrument(err, skip_all, fields(report_date = %batch.report_date), level = "info")]
    async fn build(&self, batch: &ReportBatch) -> anyhow::Result<()> {
        let documents = batch.select(|document| {
            !self.selection.is_county_scoped(document) || self.selection.is_nationwide(document)
        });
        if documents.is_empty() {
            warn!("No country documents in this batch, skipping the global report");
            return Ok(());
        }

        let extracted = extract_documents(
            documents,
            self.document_to_text.as_ref(),
            self.policy,
            extract_primary_region,
        )
        .await?;

        let mut table = Table::flat();
        for (_, primary) in extracted {
            table.accumulate(RecordSet::from(primary));
        }

        info!(rows = table.len(), "Global report built");
        self.exporter
            .export(&table, &Destination::new(Self::DESTINATION, batch.report_date))
            .await
    }
}
