//! Series name and position packed into the free-text `grouping` key

use regex::Regex;
use std::sync::LazyLock;

static GROUPING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<series>.*), (?i:book) (?P<index>.*)$").unwrap());

/// Split `"<series>, Book <index>"` into its parts.
///
/// A non-numeric index yields 0 with the series kept. Text that doesn't
/// have the shape at all becomes the series name with index 0.
pub fn parse_grouping(text: &str) -> (String, f64) {
    match GROUPING_RE.captures(text) {
        Some(caps) => {
            let series = caps["series"].to_string();
            let index = caps["index"].trim().parse::<f64>().unwrap_or(0.0);
            let index = if index.is_finite() { index } else { 0.0 };
            (series, index)
        }
        None => (text.to_string(), 0.0),
    }
}

/// Inverse of [`parse_grouping`] for a non-empty series.
///
/// The `, Book <index>` suffix is written even when the index is 0, so a
/// grouping that had no suffix comes back with `, Book 0`.
pub fn compose_grouping(series: &str, index: f64) -> String {
    if series.is_empty() {
        return String::new();
    }
    format!("{}, Book {}", series, index)
}
