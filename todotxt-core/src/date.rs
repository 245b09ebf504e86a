use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::parser::task::parser_date::is_date_shaped;

/// Format of every date written in a task line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date. Returns `None` for anything that isn't a real calendar date.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if !is_date_shaped(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Describes `date` relatively to `today`: "today", "yesterday", "in 3 days", "2 weeks ago"...
#[must_use]
pub fn relative_str(date: NaiveDate, today: NaiveDate) -> String {
    let time_delta = today.signed_duration_since(date);

    let (prefix, suffix) = match time_delta.num_days().cmp(&0) {
        Ordering::Less => (String::from("in "), String::new()),
        Ordering::Equal => return String::from("today"),
        Ordering::Greater => (String::new(), String::from(" ago")),
    };

    let time_delta_abs = time_delta.abs();
    match time_delta.num_days() {
        -1 => return String::from("tomorrow"),
        1 => return String::from("yesterday"),
        _ => (),
    }

    // >= 13 months -> show years
    let res = if 4 * 12 < time_delta_abs.num_weeks() {
        format!("{} years", time_delta_abs.num_weeks() / (12 * 4))
        // >= 5 weeks -> show months
    } else if 5 <= time_delta_abs.num_weeks() {
        format!("{} months", time_delta_abs.num_weeks() / 4)
        // >= 2 weeks -> show weeks
    } else if 2 <= time_delta_abs.num_weeks() {
        format!("{} weeks", time_delta_abs.num_weeks())
    } else {
        format!("{} days", time_delta_abs.num_days())
    };
    format!("{prefix}{res}{suffix}")
}
