use crate::category::Category;
use crate::errors::ExtractionError;
use crate::record::{CategoryValues, Record};
use crate::value_scanner::value_after_label;
use shared_kernel::region_name::RegionName;

const PARAGRAPH_BREAK: &str = "\n\n";
const TITLE_END: &str = "  ";

/// Parses the document's own region and returns it with the offset of the last
/// category label, where the search for sub-regions starts.
pub fn extract_primary(text: &str) -> Result<(Record, usize), ExtractionError> {
    let region = title(text)?;

    let values = CategoryValues::try_collect(|category| {
        let label = category.label();
        let label_start = find_label(text, category)?;
        value_after_label(text, label_start + label.len(), category)
    })?;

    let cursor = find_label(text, Category::last())?;

    Ok((Record::new(region, values), cursor))
}

fn find_label(text: &str, category: Category) -> Result<usize, ExtractionError> {
    text.find(category.label())
        .ok_or_else(|| ExtractionError::missing(format!("the \"{category}\" label")))
}

// The title block follows a two line masthead and ends at the first double space.
fn title(text: &str) -> Result<RegionName, ExtractionError> {
    let title_block = text
        .split(PARAGRAPH_BREAK)
        .nth(1)
        .ok_or_else(|| ExtractionError::missing("the title block"))?;
    let name = title_block.split(TITLE_END).next().unwrap_or_default();
    RegionName::try_from(name).map_err(|_| ExtractionError::missing("the region name"))
}

#[cfg(test)]
mod tests {
    use super::extract_primary;
    use crate::category::Category;
    use crate::errors::ExtractionError;
    use crate::record::{CategoryValues, MobilityChange, Record};

    #[test]
    fn test_extract_primary() {
        let text = "\n\nTestland  \nRetail & recreation -10%Grocery & pharmacy  Parks -5%Transit stations -20%Workplaces -30%Residential 5%";

        let (record, cursor) = extract_primary(text).unwrap();

        let expected = Record::new(
            "Testland".try_into().unwrap(),
            CategoryValues::new([
                MobilityChange::Present(-10),
                MobilityChange::Absent,
                MobilityChange::Present(-5),
                MobilityChange::Present(-20),
                MobilityChange::Present(-30),
                MobilityChange::Present(5),
            ]),
        );
        assert_eq!(record, expected);
        assert_eq!(cursor, text.find("Residential").unwrap());
    }

    #[test]
    fn test_extract_primary_reads_title_after_masthead() {
        let text = "COVID-19 Community Mobility Report\nMasthead\n\nKenya  March 29, 2020\n\nRetail & recreation\n-10%\nGrocery & pharmacy\nn/a%\nParks\n-5%\nTransit stations\n-20%\nWorkplaces\n-30%\nResidential\n+5%\n";

        let (record, _) = extract_primary(text).unwrap();

        assert_eq!(record.region, "Kenya");
        assert_eq!(record.value(Category::GroceryAndPharmacy), MobilityChange::Absent);
        assert_eq!(record.value(Category::Residential), MobilityChange::Present(5));
    }

    #[test]
    fn test_extract_primary_reads_values_after_blank_lines() {
        let text = "\n\nTestland  \nRetail & recreation\n\n-10%\nGrocery & pharmacy\n-3%\nParks\n \n+3%\nTransit stations\n-20%\nWorkplaces\n-30%\nResidential\n+5%";

        let (record, _) = extract_primary(text).unwrap();

        assert_eq!(
            record.value(Category::RetailAndRecreation),
            MobilityChange::Present(-10)
        );
        assert_eq!(record.value(Category::GroceryAndPharmacy), MobilityChange::Present(-3));
        assert_eq!(record.value(Category::Parks), MobilityChange::Present(3));
        assert_eq!(record.value(Category::Residential), MobilityChange::Present(5));
    }

    #[test]
    fn test_missing_label_is_a_layout_mismatch() {
        let text = "\n\nTestland  \nRetail & recreation -10%Grocery & pharmacy  Parks -5%Transit stations -20%Residential 5%";

        let result = extract_primary(text);

        assert!(matches!(
            result,
            Err(ExtractionError::LayoutMismatch { element }) if element.contains("Workplaces")
        ));
    }

    #[test]
    fn test_missing_title_is_a_layout_mismatch() {
        let text = "Retail & recreation -10%";
        assert!(matches!(
            extract_primary(text),
            Err(ExtractionError::LayoutMismatch { .. })
        ));
    }
}
