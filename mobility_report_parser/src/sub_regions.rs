use crate::category::Category;
use crate::errors::ExtractionError;
use crate::record::{CategoryValues, Record, RecordSet};
use crate::value_scanner::next_percent_value;
use itertools::Itertools;
use shared_kernel::region_name::RegionName;

const PARAGRAPH_BREAK: &str = "\n\n";
const PAGE_BREAK: char = '\x0c';

/// Collects every sub-region after `cursor` and returns them behind `primary`.
///
/// Each sub-region starts with the first category's label. Its values are read
/// positionally, one percent sign per category, and the search for the next region
/// resumes after the last consumed percent sign. The loop ends when no further label
/// exists.
#[tracing::instrument(skip(text, primary), fields(primary = %primary.region), level = "debug")]
pub fn extract_sub_regions(
    text: &str,
    primary: Record,
    cursor: usize,
) -> Result<RecordSet, ExtractionError> {
    let marker = Category::first().label();
    let mut record_set = RecordSet::new(primary);
    // strictly after the primary region's cursor
    let mut search_from = next_char_offset(text, cursor);

    while let Some(boundary) = find_from(text, marker, search_from) {
        let region = sub_region_name(text, search_from, boundary)?;

        let mut pointer = boundary;
        let values = CategoryValues::try_collect(|category| {
            let scanned = next_percent_value(text, pointer, category)?;
            pointer = scanned.end;
            Ok(scanned.value)
        })?;

        record_set.push(Record::new(region, values));
        search_from = pointer;
    }

    tracing::debug!(sub_regions = record_set.sub_regions().len(), "Sub-regions extracted");
    Ok(record_set)
}

fn find_from(text: &str, pattern: &str, from: usize) -> Option<usize> {
    text.get(from..)?.find(pattern).map(|index| from + index)
}

fn next_char_offset(text: &str, offset: usize) -> usize {
    text.get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(offset.saturating_add(1), |c| offset + c.len_utf8())
}

// The name is the paragraph right in front of the marker.
fn sub_region_name(
    text: &str,
    search_from: usize,
    boundary: usize,
) -> Result<RegionName, ExtractionError> {
    let before_marker = text[search_from..boundary].trim_end();
    let paragraph = before_marker
        .rfind(PARAGRAPH_BREAK)
        .map_or(before_marker, |index| {
            &before_marker[index + PARAGRAPH_BREAK.len()..]
        });

    let name = paragraph
        .lines()
        .map(|line| line.replace(PAGE_BREAK, ""))
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty())
        .join(" ");

    RegionName::try_from(name).map_err(|_| {
        ExtractionError::missing(format!("the sub-region name before offset {boundary}"))
    })
}
