use crate::category::Category;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A piece of the fixed layout is missing from the document, eg: a category label.
    #[error("Layout mismatch: {element} was not found in the document text")]
    LayoutMismatch { element: String },
    /// The token next to a located percent sign is neither the sentinel nor a signed integer.
    #[error("Failed to parse the {category} value {token:?} at offset {offset}")]
    FieldParse {
        category: Category,
        offset: usize,
        token: String,
    },
}

impl ExtractionError {
    pub(crate) fn missing(element: impl Into<String>) -> Self {
        ExtractionError::LayoutMismatch {
            element: element.into(),
        }
    }

    pub(crate) fn field(category: Category, offset: usize, token: &str) -> Self {
        ExtractionError::FieldParse {
            category,
            offset,
            token: token.chars().take(24).collect(),
        }
    }
}
