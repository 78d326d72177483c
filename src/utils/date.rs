use chrono::NaiveDate;

/// Parse a strict "YYYY-MM-DD" date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
