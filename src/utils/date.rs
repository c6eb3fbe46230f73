use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Like `parse_date`, for CLI input where a bad date aborts the command.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_calendar_valid_dates_parse() {
        assert_eq!(parse_date("2024-05-10"), NaiveDate::from_ymd_opt(2024, 5, 10));
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("10/05/2024"), None);
        assert!(matches!(require_date("yesterday"), Err(AppError::InvalidDate(_))));
    }
}
