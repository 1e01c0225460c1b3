//! Renders record sets back into report-shaped text, noise included.

use crate::category::Category;
use crate::record::{MobilityChange, Record, RecordSet};
use strum::IntoEnumIterator;

const MASTHEAD: &str = "COVID-19 Community Mobility Report\nSee how your community is moving around differently";
const NOT_ENOUGH_DATA: &str = "Not enough data for this date";
const CHART: &str = "compared to baseline\n+80%\n+40%\nBaseline\n-40%\n-80%\n";

/// Values must fit the printed width, eg: -99 to +99.
pub fn render(record_set: &RecordSet) -> String {
    let mut text = render_primary(record_set.primary());
    for sub_region in record_set.sub_regions() {
        text.push_str(&render_sub_region(sub_region));
    }
    text
}

fn render_primary(record: &Record) -> String {
    let mut text = format!("{MASTHEAD}\n\n{}  March 29, 2020\nMobility changes\n\n", record.region);
    for category in Category::iter() {
        match record.value(category) {
            MobilityChange::Present(value) => {
                text.push_str(&format!("{} {value:+}%\n{CHART}", category.label()))
            }
            MobilityChange::Absent => {
                text.push_str(&format!("{}\n{NOT_ENOUGH_DATA}\n", category.label()))
            }
        }
    }
    text
}

fn render_sub_region(record: &Record) -> String {
    let mut text = format!("\x0c\n\n{}\n\n", record.region);
    for category in Category::iter() {
        match record.value(category) {
            MobilityChange::Present(value) => {
                text.push_str(&format!("{}\n{value:+}%\n{CHART}", category.label()))
            }
            MobilityChange::Absent => {
                text.push_str(&format!("{}\n{NOT_ENOUGH_DATA}:\n", category.label()))
            }
        }
    }
    text
}
