use crate::value_scanner::sentinel_token;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

const FOOTNOTE_MARKER: char = '*';
const PAGE_BREAK: char = '\x0c';

lazy_static! {
    static ref BASELINE_CAPTION: Regex = RegexBuilder::new(r"(compared to )?\bbaseline\b")
        .case_insensitive(true)
        .build()
        .expect("BASELINE_CAPTION regex to compile");
    static ref CHART_AXIS: Regex = Regex::new(r"\+80%\s*\+40%\s*-40%\s*-80%")
        .expect("CHART_AXIS regex to compile");
    static ref NOT_ENOUGH_DATA: Regex =
        RegexBuilder::new(r"Not[\n\r\s]+enough[\n\r\s]+data[\n\r\s]+for[\n\r\s]+this[\n\r\s]+date:?")
            .case_insensitive(true)
            .build()
            .expect("NOT_ENOUGH_DATA regex to compile");
}

/// Strips the layout noise around the figures and rewrites "Not enough data for
/// this date" to the `n/a%` sentinel, so every value, present or not, ends with a
/// percent sign.
///
/// Offsets are only meaningful on the normalized text, normalize before scanning.
pub fn normalize(raw_text: &str) -> String {
    let mut text = raw_text.to_owned();
    // Every rewrite shortens the text, so this reaches a fixed point.
    loop {
        let next = normalize_once(&text);
        if next == text {
            return text;
        }
        text = next;
    }
}

fn normalize_once(text: &str) -> String {
    let text = text.replace(&[FOOTNOTE_MARKER, PAGE_BREAK][..], "");
    let text = BASELINE_CAPTION.replace_all(&text, "");
    let text = CHART_AXIS.replace_all(&text, "");
    NOT_ENOUGH_DATA
        .replace_all(&text, sentinel_token().as_str())
        .into_owned()
}
