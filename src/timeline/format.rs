//! Date and clock strings for the current-conditions panel

use chrono::Datelike;

use super::LocalTime;

/// Ordinal suffix for a day of the month.
///
/// Only the last digit is consulted, so 11, 12 and 13 come out as
/// "st", "nd" and "rd".
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats a date as `"Friday, 21st Mar '25"`
pub fn format_date(local: &LocalTime) -> String {
    let date = local.date();
    format!(
        "{}, {}{} {} '{}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%b"),
        date.format("%y"),
    )
}

/// Formats a 12-hour clock string such as `"9:05 pm"` or `"12:00 am"`
pub fn format_time(local: &LocalTime) -> String {
    let hour = local.hour();
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, local.minute(), meridiem)
}
