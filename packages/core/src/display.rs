//! Formatting helpers shared by the views.

use chrono::{DateTime, NaiveDate, Utc};

/// Render a backend date (timestamp or plain date) as `dd/mm/yyyy`.
///
/// Empty input renders as `N/A`; unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

/// Render a timestamp with date and time, or `—` when absent.
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|ts| ts.format("%d/%m/%Y, %H:%M:%S").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// The value a date input expects for a stored end date: everything before
/// the first letter, so `2024-06-30T00:00:00.000Z` becomes `2024-06-30`.
pub fn end_date_input(raw: &str) -> &str {
    match raw.find(|c: char| c.is_ascii_alphabetic()) {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Render an optional value, or `—` when absent or blank.
pub fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    match value.map(|v| v.to_string()) {
        Some(s) if !s.trim().is_empty() => s,
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_date_input_cuts_at_first_letter() {
        assert_eq!(end_date_input("2024-06-30T00:00:00.000Z"), "2024-06-30");
        assert_eq!(end_date_input("2024-06-30"), "2024-06-30");
        assert_eq!(end_date_input(""), "");
    }

    #[test]
    fn format_date_handles_both_shapes() {
        assert_eq!(format_date("2024-06-30T10:00:00.000Z"), "30/06/2024");
        assert_eq!(format_date("2024-06-30"), "30/06/2024");
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn or_dash_blanks() {
        assert_eq!(or_dash(None::<f64>), "—");
        assert_eq!(or_dash(Some("")), "—");
        assert_eq!(or_dash(Some(12.5)), "12.5");
    }
}
