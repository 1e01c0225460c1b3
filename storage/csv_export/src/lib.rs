pub mod configuration;

use anyhow::Context;
use async_trait::async_trait;
use csv::WriterBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};
use use_cases::build_reports::{Destination, TableExporter};
use use_cases::tables::Table;

/// Writes tables to `<processed_root>/<report date>/<name>_<report date>.csv`.
pub struct CsvTableExporter {
    processed_root: PathBuf,
}

impl CsvTableExporter {
    pub fn new(processed_root: impl Into<PathBuf>) -> Self {
        Self {
            processed_root: processed_root.into(),
        }
    }

    pub fn from_configuration() -> anyhow::Result<Self> {
        configuration::Settings::processed_directory().map(Self::new)
    }

    pub fn file_path(&self, destination: &Destination) -> PathBuf {
        self.processed_root
            .join(destination.report_date.format("%Y-%m-%d").to_string())
            .join(format!("{}.csv", destination.file_stem()))
    }
}

/// Header row first, then one line per table row.
pub fn write_table<W: Write>(table: &Table, writer: W) -> anyhow::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer
        .write_record(table.columns())
        .context("Failed to write the csv header")?;
    for row in table.cells() {
        writer.write_record(&row).context("Failed to write a csv row")?;
    }
    writer.flush().context("Failed to flush the csv writer")?;
    Ok(())
}

async fn ensure_parent_exists(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[async_trait]
impl TableExporter for CsvTableExporter {
    #[tracing::instrument(err, skip(self, table), fields(rows = table.len()), level = "info")]
    async fn export(&self, table: &Table, destination: &Destination) -> anyhow::Result<()> {
        let mut contents = vec![];
        write_table(table, &mut contents)?;

        let path = self.file_path(destination);
        ensure_parent_exists(&path).await?;
        tokio::fs::write(&path, contents)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Exported {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{write_table, CsvTableExporter};
    use chrono::NaiveDate;
    use mobility_report_parser::{CategoryValues, MobilityChange, Record, RecordSet};
    use shared_kernel::region_name::RegionName;
    use tempfile::tempdir;
    use use_cases::build_reports::{Destination, TableExporter};
    use use_cases::tables::Table;

    fn record(name: &str, values: [Option<i32>; 6]) -> Record {
        Record::new(
            RegionName::try_from(name).unwrap(),
            CategoryValues::new(values.map(MobilityChange::from)),
        )
    }

    fn alabama() -> RecordSet {
        let mut record_set = RecordSet::new(record(
            "Alabama",
            [Some(-10), None, Some(-5), Some(-20), Some(-30), Some(5)],
        ));
        record_set.push(record(
            "Autauga County",
            [Some(-12), None, Some(5), Some(-40), Some(-8), Some(9)],
        ));
        record_set.push(record(
            "Baldwin County, AL",
            [Some(-1), Some(2), None, None, Some(-3), Some(4)],
        ));
        record_set
    }

    fn render(table: &Table) -> String {
        let mut contents = vec![];
        write_table(table, &mut contents).unwrap();
        String::from_utf8(contents).unwrap()
    }

    #[test]
    fn test_flat_table() {
        let mut table = Table::flat();
        table.accumulate(RecordSet::from(record(
            "Kenya",
            [Some(-10), None, Some(-5), Some(-20), Some(-30), Some(5)],
        )));

        assert_eq!(
            render(&table),
            "Region,Retail & recreation,Grocery & pharmacy,Parks,Transit stations,Workplaces,Residential\n\
             Kenya,-10,,-5,-20,-30,5\n"
        );
    }

    #[test]
    fn test_region_table_has_state_column_and_quotes_commas() {
        let mut table = Table::region_with_parent();
        table.accumulate(alabama());

        assert_eq!(
            render(&table),
            "Region,Retail & recreation,Grocery & pharmacy,Parks,Transit stations,Workplaces,Residential,State\n\
             Autauga County,-12,,5,-40,-8,9,Alabama\n\
             \"Baldwin County, AL\",-1,2,,,-3,4,Alabama\n"
        );
    }

    #[tokio::test]
    async fn test_export_writes_to_the_dated_directory() {
        let root = tempdir().unwrap();
        let exporter = CsvTableExporter::new(root.path());
        let destination = Destination::new(
            "United States county",
            NaiveDate::from_ymd_opt(2020, 3, 29).unwrap(),
        );
        let mut table = Table::region_with_parent();
        table.accumulate(alabama());

        exporter.export(&table, &destination).await.unwrap();

        let path = root
            .path()
            .join("2020-03-29")
            .join("United_States_county_2020-03-29.csv");
        assert_eq!(exporter.file_path(&destination), path);
        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents, render(&table));
        assert_eq!(contents.lines().count(), 3);
    }
}
