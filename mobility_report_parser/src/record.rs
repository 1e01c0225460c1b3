use crate::category::Category;
use shared_kernel::region_name::RegionName;
use strum::{EnumCount, IntoEnumIterator};

/// A single category observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MobilityChange {
    /// Percentage change compared to the baseline.
    Present(i32),
    /// The report printed "Not enough data for this date".
    #[default]
    Absent,
}

impl MobilityChange {
    pub fn percentage(&self) -> Option<i32> {
        match self {
            MobilityChange::Present(value) => Some(*value),
            MobilityChange::Absent => None,
        }
    }
}

impl From<Option<i32>> for MobilityChange {
    fn from(value: Option<i32>) -> Self {
        value.map_or(MobilityChange::Absent, MobilityChange::Present)
    }
}

/// One value per [`Category`], always all six, always in category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryValues([MobilityChange; Category::COUNT]);

impl CategoryValues {
    pub fn new(values: [MobilityChange; Category::COUNT]) -> Self {
        Self(values)
    }

    /// Builds the values category by category, in order, stopping at the first error.
    pub fn try_collect<E>(
        mut scan: impl FnMut(Category) -> Result<MobilityChange, E>,
    ) -> Result<Self, E> {
        let mut values = [MobilityChange::Absent; Category::COUNT];
        for category in Category::iter() {
            values[category.index()] = scan(category)?;
        }
        Ok(Self(values))
    }

    pub fn get(&self, category: Category) -> MobilityChange {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, MobilityChange)> + '_ {
        Category::iter().map(|category| (category, self.get(category)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub region: RegionName,
    pub values: CategoryValues,
}

impl Record {
    pub fn new(region: RegionName, values: CategoryValues) -> Self {
        Self { region, values }
    }

    pub fn value(&self, category: Category) -> MobilityChange {
        self.values.get(category)
    }
}

/// The records of one document: the primary region first, then its sub-regions in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    // never empty, index 0 is the primary region
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(primary: Record) -> Self {
        Self {
            records: vec![primary],
        }
    }

    pub fn push(&mut self, sub_region: Record) {
        self.records.push(sub_region);
    }

    pub fn primary(&self) -> &Record {
        &self.records[0]
    }

    pub fn sub_regions(&self) -> &[Record] {
        &self.records[1..]
    }

    pub fn has_sub_regions(&self) -> bool {
        self.records.len() > 1
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Record> for RecordSet {
    fn from(primary: Record) -> Self {
        RecordSet::new(primary)
    }
}
