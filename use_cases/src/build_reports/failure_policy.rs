use crate::build_reports::contracts::DocumentToText;
use crate::build_reports::documents::MobilityDocument;
use anyhow::{bail, Context};
use mobility_report_parser::ExtractionError;
use tracing::error;

/// What a report does with a document whose text does not match the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The first failing document fails the whole report, nothing is exported.
    Abort,
    /// Failing documents are logged by identifier and left out. The report only
    /// fails when every document failed.
    SkipAndLog,
}

/// Converts and extracts each document in order. A document contributes all of its
/// records or none of them.
pub(crate) async fn extract_documents<T: Send>(
    documents: Vec<MobilityDocument>,
    document_to_text: &dyn DocumentToText,
    policy: FailurePolicy,
    extract: fn(&str) -> Result<T, ExtractionError>,
) -> anyhow::Result<Vec<(MobilityDocument, T)>> {
    let mut results = Vec::with_capacity(documents.len());
    let mut errors = vec![];

    for document in documents {
        match extract_document(&document, document_to_text, extract).await {
            Ok(extracted) => results.push((document, extracted)),
            Err(err) if policy == FailurePolicy::Abort => return Err(err),
            Err(err) => {
                error!(document = %document, "Skipping document: {err:?}");
                errors.push(err);
            }
        }
    }

    if results.is_empty() && !errors.is_empty() {
        bail!("Every document failed to extract: {errors:?}")
    }

    Ok(results)
}

async fn extract_document<T>(
    document: &MobilityDocument,
    document_to_text: &dyn DocumentToText,
    extract: fn(&str) -> Result<T, ExtractionError>,
) -> anyhow::Result<T> {
    let text = document_to_text
        .document_to_text(document)
        .await
        .with_context(|| format!("Failed to convert {document} to text"))?;
    extract(&text).with_context(|| format!("Failed to extract records from {document}"))
}
