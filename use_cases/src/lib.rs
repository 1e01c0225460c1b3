pub mod build_reports;
pub mod tables;
