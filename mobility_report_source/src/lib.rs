pub mod configuration;
pub mod pdf_reader;
pub mod report_directory;
pub mod selection;
pub mod web_page_reader;

pub use pdf_reader::PdfTextConverter;
pub use report_directory::ReportDirectory;
pub use selection::UsDocumentSelection;
pub use web_page_reader::WebPageReader;
