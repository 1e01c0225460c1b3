use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// A downloaded report, identified by its file name, eg: `2020-03-29_KE_Mobility_Report_en.pdf`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MobilityDocument {
    path: PathBuf,
}

impl MobilityDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn identifier(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for MobilityDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

/// Every document published for one report date.
#[derive(Debug, Clone)]
pub struct ReportBatch {
    pub report_date: NaiveDate,
    pub documents: Vec<MobilityDocument>,
}

impl ReportBatch {
    pub fn new(report_date: NaiveDate, documents: Vec<MobilityDocument>) -> Self {
        Self {
            report_date,
            documents,
        }
    }

    /// The documents matching `predicate`, in ascending identifier order.
    pub fn select(&self, predicate: impl Fn(&MobilityDocument) -> bool) -> Vec<MobilityDocument> {
        let mut documents: Vec<_> = self
            .documents
            .iter()
            .filter(|document| predicate(document))
            .cloned()
            .collect();
        documents.sort_by_key(MobilityDocument::identifier);
        documents
    }
}

/// Where a table ends up, eg: `World` for the `2020-03-29` batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    pub report_date: NaiveDate,
}

impl Destination {
    pub fn new(name: &str, report_date: NaiveDate) -> Self {
        Self {
            name: name.trim().replace(' ', "_"),
            report_date,
        }
    }

    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.name, self.report_date.format("%Y-%m-%d"))
    }
}
