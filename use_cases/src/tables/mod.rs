use mobility_report_parser::{Category, MobilityChange, Record, RecordSet};
use shared_kernel::region_name::RegionName;

pub const REGION_COLUMN: &str = "Region";
pub const STATE_COLUMN: &str = "State";

/// How a record set is folded into a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulationPolicy {
    /// One row per record.
    Flat,
    /// One row per sub-region, labelled with the primary region as `State`.
    /// A record set without sub-regions keeps its primary row.
    RegionWithParent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub record: Record,
    pub state: Option<RegionName>,
}

impl TableRow {
    pub fn value(&self, category: Category) -> MobilityChange {
        self.record.value(category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    policy: AccumulationPolicy,
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new(policy: AccumulationPolicy) -> Self {
        Self {
            policy,
            rows: vec![],
        }
    }

    pub fn flat() -> Self {
        Self::new(AccumulationPolicy::Flat)
    }

    pub fn region_with_parent() -> Self {
        Self::new(AccumulationPolicy::RegionWithParent)
    }

    /// Appends the rows of one document. Each call appends exactly once.
    pub fn accumulate(&mut self, record_set: RecordSet) {
        match self.policy {
            AccumulationPolicy::Flat => self.rows.extend(
                record_set
                    .into_records()
                    .into_iter()
                    .map(|record| TableRow { record, state: None }),
            ),
            AccumulationPolicy::RegionWithParent => {
                let state = record_set.primary().region.clone();
                let skip = usize::from(record_set.has_sub_regions());
                self.rows.extend(
                    record_set
                        .into_records()
                        .into_iter()
                        .skip(skip)
                        .map(|record| TableRow {
                            record,
                            state: Some(state.clone()),
                        }),
                );
            }
        }
    }

    pub fn has_state_column(&self) -> bool {
        self.policy == AccumulationPolicy::RegionWithParent
    }

    /// `Region`, the categories in report order, then `State` for sub-region tables.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec![REGION_COLUMN];
        columns.extend(Category::all().map(|category| category.label()));
        if self.has_state_column() {
            columns.push(STATE_COLUMN);
        }
        columns
    }

    /// Rows as strings in column order, absent values as empty cells.
    pub fn cells(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| {
            let mut cells = vec![row.record.region.inner()];
            cells.extend(row.record.values.iter().map(|(_, value)| {
                value
                    .percentage()
                    .map(|percentage| percentage.to_string())
                    .unwrap_or_default()
            }));
            if self.has_state_column() {
                cells.push(row.state.as_ref().map(RegionName::inner).unwrap_or_default());
            }
            cells
        })
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The standalone sub-region table of one document, if it has sub-regions at all.
pub fn region_table(record_set: RecordSet) -> Option<Table> {
    if !record_set.has_sub_regions() {
        return None;
    }
    let mut table = Table::region_with_parent();
    table.accumulate(record_set);
    Some(table)
}
