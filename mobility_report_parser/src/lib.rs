mod category;
mod errors;
mod normalizer;
mod primary_region;
mod record;
mod sub_regions;
#[cfg(any(test, feature = "testing"))]
pub mod synthetic_document;
pub mod value_scanner;

pub use category::Category;
pub use errors::ExtractionError;
pub use normalizer::normalize;
pub use primary_region::extract_primary;
pub use record::{CategoryValues, MobilityChange, Record, RecordSet};
pub use sub_regions::extract_sub_regions;

/// Extracts the primary region and every sub-region of one report's text.
pub fn extract_record_set(raw_text: &str) -> Result<RecordSet, ExtractionError> {
    let text = normalize(raw_text);
    let (primary, cursor) = extract_primary(&text)?;
    extract_sub_regions(&text, primary, cursor)
}

/// Extracts only the document's own region.
pub fn extract_primary_region(raw_text: &str) -> Result<Record, ExtractionError> {
    let text = normalize(raw_text);
    extract_primary(&text).map(|(primary, _)| primary)
}
