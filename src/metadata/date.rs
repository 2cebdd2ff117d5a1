use chrono::{DateTime, NaiveDate, Utc};

/// Date format stored on the record
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a publish date: `YYYY-MM-DD`, an RFC 3339 timestamp, or a bare year
pub fn parse_pub_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

/// Fallback for a date that cannot be parsed
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
