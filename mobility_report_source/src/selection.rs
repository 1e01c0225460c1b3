use use_cases::build_reports::{DocumentSelection, MobilityDocument};

const USA_MARKER: &str = "_US_";
const NATIONWIDE_USA_SUFFIX: &str = "_US_Mobility_Report_en.pdf";

/// Classifies documents by file name, eg: `2020-03-29_US_Alabama_Mobility_Report_en.pdf`
/// is a state document while `2020-03-29_US_Mobility_Report_en.pdf` covers the whole USA.
pub struct UsDocumentSelection;

impl DocumentSelection for UsDocumentSelection {
    fn is_county_scoped(&self, document: &MobilityDocument) -> bool {
        document.identifier().contains(USA_MARKER)
    }

    fn is_nationwide(&self, document: &MobilityDocument) -> bool {
        document.identifier().ends_with(NATIONWIDE_USA_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::UsDocumentSelection;
    use rstest::rstest;
    use use_cases::build_reports::{DocumentSelection, MobilityDocument};

    #[rstest]
    #[case("2020-03-29_US_Alabama_Mobility_Report_en.pdf", true, false)]
    #[case("2020-03-29_US_New_York_Mobility_Report_en.pdf", true, false)]
    #[case("2020-03-29_US_Mobility_Report_en.pdf", true, true)]
    #[case("2020-03-29_KE_Mobility_Report_en.pdf", false, false)]
    #[case("2020-03-29_AU_Mobility_Report_en.pdf", false, false)]
    fn test_selection(
        #[case] file_name: &str,
        #[case] county_scoped: bool,
        #[case] nationwide: bool,
    ) {
        let document = MobilityDocument::new(format!("raw/2020-03-29/{file_name}"));
        assert_eq!(UsDocumentSelection.is_county_scoped(&document), county_scoped);
        assert_eq!(UsDocumentSelection.is_nationwide(&document), nationwide);
    }
}
