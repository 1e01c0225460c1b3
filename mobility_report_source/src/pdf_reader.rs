use anyhow::Context;
use async_trait::async_trait;
use use_cases::build_reports::{DocumentToText, MobilityDocument};

/// Reads a downloaded report and linearizes its pages with `pdf-extract`.
pub struct PdfTextConverter;

#[async_trait]
impl DocumentToText for PdfTextConverter {
    #[tracing::instrument(err, skip(self), fields(document = %document), level = "debug")]
    async fn document_to_text(&self, document: &MobilityDocument) -> anyhow::Result<String> {
        let file_bytes = tokio::fs::read(document.path())
            .await
            .with_context(|| format!("Failed to read {}", document.path().display()))?;
        tokio::task::spawn_blocking(move || resolve_text_from_file(&file_bytes))
            .await
            .context("The pdf conversion task panicked")?
    }
}

fn resolve_text_from_file(file_bytes: &[u8]) -> anyhow::Result<String> {
    use pdf_extract::*;
    extract_text_from_mem(file_bytes).context("Failed to extract pdf to text")
}

#[cfg(test)]
mod tests {
    use super::PdfTextConverter;
    use use_cases::build_reports::{DocumentToText, MobilityDocument};

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let document = MobilityDocument::new("does/not/exist/2020-03-29_KE_Mobility_Report_en.pdf");
        let result = PdfTextConverter.document_to_text(&document).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_non_pdf_file_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("2020-03-29_KE_Mobility_Report_en.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();

        let result = PdfTextConverter
            .document_to_text(&MobilityDocument::new(path))
            .await;

        assert!(result.is_err());
    }
}
