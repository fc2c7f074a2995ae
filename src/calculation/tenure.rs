//! Anniversary-aware year counting.
//!
//! Age and years of experience are both the number of completed
//! anniversaries of a start date on or before a given day.

use chrono::{Datelike, Local, NaiveDate};

/// Returns today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Counts the anniversaries of `since` that have been reached by `today`.
///
/// The difference in calendar years is reduced by one when `today` falls
/// before the month and day of `since`. A start date of 29 February reaches
/// its anniversary on 1 March in non-leap years. Start dates after `today`
/// count as zero years.
///
/// # Examples
///
/// ```
/// use campus_model::calculation::completed_years;
/// use chrono::NaiveDate;
///
/// let born = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// let eve = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// let birthday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// assert_eq!(completed_years(born, eve), 23);
/// assert_eq!(completed_years(born, birthday), 24);
/// ```
pub fn completed_years(since: NaiveDate, today: NaiveDate) -> u32 {
    if since > today {
        return 0;
    }

    let mut years = today.year() - since.year();
    if (today.month(), today.day()) < (since.month(), since.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}
