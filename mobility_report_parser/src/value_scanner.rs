//! Every assumption about how a value is printed lives here.
//!
//! Two scans exist: the primary region prints its value right after the category
//! label, while sub-regions are read positionally by walking from one percent sign
//! to the next and reading a fixed-width token in front of each.

use crate::category::Category;
use crate::errors::ExtractionError;
use crate::record::MobilityChange;
use lazy_static::lazy_static;
use regex::Regex;

/// Width of the token read in front of a percent sign, eg: "-12", "\n+5" or "n/a".
pub const VALUE_WIDTH: usize = 3;
/// What "Not enough data for this date" is normalized to.
pub const SENTINEL: &str = "n/a";
pub const PERCENT: char = '%';

lazy_static! {
    static ref SIGNED_INTEGER: Regex =
        Regex::new(r"^[+-]?\d+$").expect("SIGNED_INTEGER regex to compile");
}

/// The sentinel as it appears in normalized text.
pub fn sentinel_token() -> String {
    format!("{SENTINEL}{PERCENT}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScannedValue {
    pub value: MobilityChange,
    /// Offset right after the consumed percent sign.
    pub end: usize,
}

fn classify(token: &str) -> Option<MobilityChange> {
    if token == SENTINEL {
        return Some(MobilityChange::Absent);
    }
    if !SIGNED_INTEGER.is_match(token) {
        return None;
    }
    token.parse::<i32>().ok().map(MobilityChange::Present)
}

// Signs, digits or the sentinel. Anything else after a blank is the next label.
fn starts_value(text: &str) -> bool {
    text.starts_with(SENTINEL)
        || text
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_digit() || c == '+' || c == '-')
}

/// Reads the value printed right after a category label, `value_start` being the
/// offset just past the label.
///
/// A space followed by anything but a value means the value was left blank, eg:
/// `"Grocery & pharmacy  Parks"`. Otherwise whitespace is skipped and the text up to
/// the next percent sign is the value.
pub(crate) fn value_after_label(
    text: &str,
    value_start: usize,
    category: Category,
) -> Result<MobilityChange, ExtractionError> {
    let after_label = text.get(value_start..).unwrap_or_default();
    let rest = after_label.trim_start();
    let offset = text.len() - rest.len();

    if rest.is_empty() || (after_label.starts_with(' ') && !starts_value(rest)) {
        return Ok(MobilityChange::Absent);
    }

    let percent = rest
        .find(PERCENT)
        .ok_or_else(|| ExtractionError::field(category, offset, rest))?;
    let token = rest[..percent].trim();

    classify(token).ok_or_else(|| ExtractionError::field(category, offset, token))
}

/// Finds the next percent sign at or after `from` and reads the fixed-width token in
/// front of it. The window never reaches back before `from`.
pub(crate) fn next_percent_value(
    text: &str,
    from: usize,
    category: Category,
) -> Result<ScannedValue, ExtractionError> {
    let remaining = text.get(from..).unwrap_or_default();
    let percent = remaining
        .find(PERCENT)
        .map(|index| from + index)
        .ok_or_else(|| ExtractionError::field(category, from, "<no percent sign>"))?;

    let window_start = text[from..percent]
        .char_indices()
        .rev()
        .take(VALUE_WIDTH)
        .last()
        .map_or(percent, |(index, _)| from + index);
    let window = &text[window_start..percent];
    let window = window.strip_prefix('\n').unwrap_or(window);

    let token = window.rsplit(char::is_whitespace).next().unwrap_or_default();
    let token_start = percent - token.len();

    if token_start == window_start && window_start > from && overflows_window(text, window_start) {
        return Err(ExtractionError::field(
            category,
            window_start,
            &text[window_start..percent],
        ));
    }

    let value =
        classify(token).ok_or_else(|| ExtractionError::field(category, token_start, token))?;

    Ok(ScannedValue {
        value,
        end: percent + PERCENT.len_utf8(),
    })
}

// A value wider than the window, eg: "-100", shows up as a token glued to more digits.
fn overflows_window(text: &str, window_start: usize) -> bool {
    text[..window_start]
        .chars()
        .next_back()
        .map_or(false, |c| c.is_ascii_digit() || c == '+' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::{next_percent_value, sentinel_token, value_after_label, ScannedValue};
    use crate::category::Category;
    use crate::errors::ExtractionError;
    use crate::record::MobilityChange;
    use rstest::rstest;

    #[rstest]
    #[case(" -10%", MobilityChange::Present(-10))]
    #[case("\n+7%", MobilityChange::Present(7))]
    #[case(" 5%", MobilityChange::Present(5))]
    #[case("-3%", MobilityChange::Present(-3))]
    #[case(" n/a%", MobilityChange::Absent)]
    #[case("  Parks -5%", MobilityChange::Absent)]
    #[case(" \nParks -5%", MobilityChange::Absent)]
    #[case("", MobilityChange::Absent)]
    #[case("\n\n", MobilityChange::Absent)]
    #[case("\n\n-10%", MobilityChange::Present(-10))]
    #[case("\n \n+3%", MobilityChange::Present(3))]
    #[case("  -8%", MobilityChange::Present(-8))]
    #[case("\nn/a%", MobilityChange::Absent)]
    fn test_value_after_label(#[case] after_label: &str, #[case] expected: MobilityChange) {
        let text = format!("Parks{after_label}");
        let value = value_after_label(&text, "Parks".len(), Category::Parks).unwrap();
        assert_eq!(value, expected);
    }

    #[rstest]
    #[case("\nWorkplaces -30%")]
    #[case("\nabc%")]
    #[case(" +x%")]
    #[case(" -12")]
    fn test_value_after_label_rejects_garbage(#[case] after_label: &str) {
        let text = format!("Parks{after_label}");
        let result = value_after_label(&text, "Parks".len(), Category::Parks);
        assert!(matches!(
            result,
            Err(ExtractionError::FieldParse {
                category: Category::Parks,
                ..
            })
        ));
    }

    #[rstest]
    #[case("Retail\n-12%", MobilityChange::Present(-12))]
    #[case("Retail\n+5%", MobilityChange::Present(5))]
    #[case("Retail\n+0%", MobilityChange::Present(0))]
    #[case("Retail 7%", MobilityChange::Present(7))]
    #[case("Retail\nn/a%", MobilityChange::Absent)]
    fn test_next_percent_value(#[case] text: &str, #[case] expected: MobilityChange) {
        let scanned = next_percent_value(text, 0, Category::RetailAndRecreation).unwrap();
        assert_eq!(
            scanned,
            ScannedValue {
                value: expected,
                end: text.len()
            }
        );
    }

    #[test]
    fn test_next_percent_value_does_not_reread_consumed_text() {
        let text = "-10%+3%";
        let first = next_percent_value(text, 0, Category::Parks).unwrap();
        assert_eq!(first.value, MobilityChange::Present(-10));
        let second = next_percent_value(text, first.end, Category::Workplaces).unwrap();
        assert_eq!(second.value, MobilityChange::Present(3));
        assert_eq!(second.end, text.len());
    }

    #[rstest]
    #[case("Retail\n-100%")]
    #[case("Retail\n+112%")]
    fn test_values_wider_than_the_window_fail(#[case] text: &str) {
        let result = next_percent_value(text, 0, Category::RetailAndRecreation);
        assert!(matches!(result, Err(ExtractionError::FieldParse { .. })));
    }

    #[rstest]
    #[case("Retail\nabc%")]
    #[case("Retail\n12 %")]
    #[case("Retail with no value")]
    fn test_next_percent_value_rejects_garbage(#[case] text: &str) {
        let result = next_percent_value(text, 0, Category::RetailAndRecreation);
        assert!(matches!(result, Err(ExtractionError::FieldParse { .. })));
    }

    #[test]
    fn test_sentinel_token() {
        assert_eq!(sentinel_token(), "n/a%");
    }
}
