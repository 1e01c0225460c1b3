use csv_export::CsvTableExporter;
use mobility_report_source::{PdfTextConverter, UsDocumentSelection};
use std::sync::Arc;
use use_cases::build_reports::BuildReports;

pub const SERVICE_NAME: &str = "mobility_reports";

/// Pdf text conversion, csv export and the USA document selection.
pub fn report_builder() -> anyhow::Result<BuildReports> {
    let exporter = CsvTableExporter::from_configuration()?;
    Ok(BuildReports::new(
        Arc::new(PdfTextConverter),
        Arc::new(exporter),
        Arc::new(UsDocumentSelection),
    ))
}
