use crate::build_reports::contracts::{
    DocumentSelection, DocumentSource, DocumentToText, TableExporter,
};
use crate::build_reports::documents::{Destination, MobilityDocument, ReportBatch};
use crate::tables::Table;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::NaiveDate;
use mobility_report_parser::synthetic_document::render;
use mobility_report_parser::{CategoryValues, MobilityChange, Record, RecordSet};
use std::collections::BTreeMap;
use std::sync::Mutex;

fn values(values: [Option<i32>; 6]) -> CategoryValues {
    CategoryValues::new(values.map(MobilityChange::from))
}

/// A report with fixed values, eg: Parks is -5 for every primary region.
pub(crate) fn document_text(primary: &str, sub_regions: &[&str]) -> String {
    let mut record_set = RecordSet::new(Record::new(
        primary.try_into().unwrap(),
        values([Some(-10), None, Some(-5), Some(-20), Some(-30), Some(5)]),
    ));
    for name in sub_regions {
        record_set.push(Record::new(
            (*name).try_into().unwrap(),
            values([Some(-12), None, Some(5), Some(-40), Some(-8), Some(9)]),
        ));
    }
    render(&record_set)
}

#[derive(Default, Clone)]
pub(crate) struct FakeDocuments(BTreeMap<String, String>);

impl FakeDocuments {
    pub(crate) fn with(mut self, identifier: &str, text: String) -> Self {
        self.0.insert(identifier.to_string(), text);
        self
    }
}

#[async_trait]
impl DocumentToText for FakeDocuments {
    async fn document_to_text(&self, document: &MobilityDocument) -> anyhow::Result<String> {
        self.0
            .get(&document.identifier())
            .cloned()
            .ok_or_else(|| anyhow!("Unknown document {document}"))
    }
}

pub(crate) fn batch(documents: &FakeDocuments) -> ReportBatch {
    let report_date = NaiveDate::from_ymd_opt(2020, 3, 29).unwrap();
    let documents = documents
        .0
        .keys()
        .map(|identifier| MobilityDocument::new(format!("raw/2020-03-29/{identifier}")))
        .collect();
    ReportBatch::new(report_date, documents)
}

#[derive(Default)]
pub(crate) struct RecordingExporter(Mutex<Vec<(Destination, Table)>>);

impl RecordingExporter {
    pub(crate) fn exported(&self) -> Vec<(Destination, Table)> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl TableExporter for RecordingExporter {
    async fn export(&self, table: &Table, destination: &Destination) -> anyhow::Result<()> {
        self.0
            .lock()
            .unwrap()
            .push((destination.clone(), table.clone()));
        Ok(())
    }
}

pub(crate) struct FakeSelection;

impl DocumentSelection for FakeSelection {
    fn is_county_scoped(&self, document: &MobilityDocument) -> bool {
        document.identifier().contains("_US_")
    }

    fn is_nationwide(&self, document: &MobilityDocument) -> bool {
        document.identifier().ends_with("_US_Mobility_Report_en.pdf")
    }
}

pub(crate) struct FakeSource(pub Option<ReportBatch>);

#[async_trait]
impl DocumentSource for FakeSource {
    async fn list_new_documents(&self) -> anyhow::Result<Option<ReportBatch>> {
        Ok(self.0.clone())
    }
}
