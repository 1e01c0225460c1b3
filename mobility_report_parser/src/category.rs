use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

/// The six mobility metrics of a report, in the order they are printed.
///
/// The declaration order is the scan order and the output column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr, Display, IntoStaticStr,
)]
pub enum Category {
    #[strum(serialize = "Retail & recreation")]
    RetailAndRecreation,
    #[strum(serialize = "Grocery & pharmacy")]
    GroceryAndPharmacy,
    #[strum(serialize = "Parks")]
    Parks,
    #[strum(serialize = "Transit stations")]
    TransitStations,
    #[strum(serialize = "Workplaces")]
    Workplaces,
    #[strum(serialize = "Residential")]
    Residential,
}

impl Category {
    /// The label printed in the report, which is also the column header.
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    /// Every region record starts with this category.
    pub fn first() -> Self {
        Category::RetailAndRecreation
    }

    pub fn last() -> Self {
        Category::Residential
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
