use crate::build_reports::contracts::{DocumentSelection, DocumentToText, TableExporter};
use crate::build_reports::documents::{Destination, ReportBatch};
use crate::build_reports::failure_policy::{extract_documents, FailurePolicy};
use crate::build_reports::ReportBuilder;
use crate::tables::Table;
use async_trait::async_trait;
use mobility_report_parser::extract_record_set;
use std::sync::Arc;
use tracing::{info, warn};

/// Every USA county in one table, labelled with its state.
pub struct CountyReport {
    document_to_text: Arc<dyn DocumentToText>,
    exporter: Arc<dyn TableExporter>,
    selection: Arc<dyn DocumentSelection>,
    policy: FailurePolicy,
}

impl CountyReport {
    pub const DESTINATION: &'static str = "United_States_county";

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
impl ReportBuilder for CountyReport {
    fn name(&self) -> &'static str {
        "county"
    }

    #[tracing::instrument(err, skip_all, fields(report_date = %batch.report_date), level = "info")]
    async fn build(&self, batch: &ReportBatch) -> anyhow::Result<()> {
        // state documents only, the nationwide one has no counties
        let documents = batch.select(|document| {
            self.selection.is_county_scoped(document) && !self.selection.is_nationwide(document)
        });
        if documents.is_empty() {
            warn!("No state documents in this batch, skipping the county report");
            return Ok(());
        }

        let extracted = extract_documents(
            documents,
            self.document_to_text.as_ref(),
            self.policy,
            extract_record_set,
        )
        .await?;

        let mut table = Table::region_with_parent();
        for (_, record_set) in extracted {
            table.accumulate(record_set);
        }

        info!(rows = table.len(), "County report built");
        self.exporter
            .export(&table, &Destination::new(Self::DESTINATION, batch.report_date))
            .await
    }
}
