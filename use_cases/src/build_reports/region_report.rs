use crate::build_reports::contracts::{DocumentSelection, DocumentToText, TableExporter};
use crate::build_reports::documents::{Destination, ReportBatch};
use crate::build_reports::failure_policy::{extract_documents, FailurePolicy};
use crate::build_reports::ReportBuilder;
use crate::tables::region_table;
use async_trait::async_trait;
use mobility_report_parser::extract_record_set;
use std::sync::Arc;
use tracing::{debug, info};

/// One table per country that publishes sub-regions, named after the country.
pub struct RegionReport {
    document_to_text: Arc<dyn DocumentToText>,
    exporter: Arc<dyn TableExporter>,
    selection: Arc<dyn DocumentSelection>,
    policy: FailurePolicy,
}

impl RegionReport {
    pub fn new(
        document_to_text: Arc<dyn DocumentToText>,
        exporter: Arc<dyn TableExporter>,
        selection: Arc<dyn DocumentSelection>,
    ) -> Self {
        Self {
            document_to_text,
            exporter,
            selection,
            policy: FailurePolicy::SkipAndLog,
        }
    }

    pub fn with_failure_policy(self, policy: FailurePolicy) -> Self {
        Self { policy, ..self }
    }
}

#[async_trait]
impl ReportBuilder for RegionReport {
    fn name(&self) -> &'static str {
        "region"
    }

    #[tracing::instrument(err, skip_all, fields(report_date = %batch.report_date), level = "info")]
    async fn build(&self, batch: &ReportBatch) -> anyhow::Result<()> {
        let documents = batch.select(|document| {
            !self.selection.is_county_scoped(document) || self.selection.is_nationwide(document)
        });

        let extracted = extract_documents(
            documents,
            self.document_to_text.as_ref(),
            self.policy,
            extract_record_set,
        )
        .await?;

        let mut exported = 0;
        for (document, record_set) in extracted {
            let name = record_set.primary().region.inner();
            match region_table(record_set) {
                Some(table) => {
                    self.exporter
                        .export(&table, &Destination::new(&name, batch.report_date))
                        .await?;
                    exported += 1;
                }
                None => debug!(document = %document, "No sub-regions"),
            }
        }

        info!(tables = exported, "Region report built");
        Ok(())
    }
}
