use chrono::{Days, NaiveDate};

/// `today` minus `offset` days. Offsets reaching before 0001-01-01 clamp to
/// that date, the earliest one [`format_date`] renders as `YYYY-MM-DD`.
pub fn days_ago(today: NaiveDate, offset: u32) -> NaiveDate {
    let floor = year_one();
    today
        .checked_sub_days(Days::new(u64::from(offset)))
        .filter(|d| *d >= floor)
        .unwrap_or(floor)
}

/// `YYYY-MM-DD`, the only date format the history table accepts.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn year_one() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}
