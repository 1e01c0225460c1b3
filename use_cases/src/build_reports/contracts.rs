use crate::build_reports::documents::{Destination, MobilityDocument, ReportBatch};
use crate::tables::Table;
use async_trait::async_trait;

/// Linearizes a document's pages into one text stream.
#[async_trait]
pub trait DocumentToText: Send + Sync {
    async fn document_to_text(&self, document: &MobilityDocument) -> anyhow::Result<String>;
}

#[async_trait]
pub trait TableExporter: Send + Sync {
    async fn export(&self, table: &Table, destination: &Destination) -> anyhow::Result<()>;
}

pub trait DocumentSelection: Send + Sync {
    /// USA documents, the nationwide one included.
    fn is_county_scoped(&self, document: &MobilityDocument) -> bool;
    /// The single document covering the whole of the USA.
    fn is_nationwide(&self, document: &MobilityDocument) -> bool;
}

/// Lists the documents published since the last run.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// `None` when nothing new was published.
    async fn list_new_documents(&self) -> anyhow::Result<Option<ReportBatch>>;
}
