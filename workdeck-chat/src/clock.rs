//! Display-time formatting
//!
//! Message timestamps are display strings, not epoch values: the store
//! formats the wall clock once at send time. Formatting is a pure function
//! over [`NaiveTime`] so it can be tested without pinning a timezone.

use chrono::{Local, NaiveTime, Timelike};

/// Format a clock time as 12-hour `H:MM AM`/`H:MM PM`
///
/// Hours are not zero-padded, minutes are. Midnight and noon both render
/// with hour 12.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use workdeck_chat::clock::format_clock_time;
///
/// let t = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
/// assert_eq!(format_clock_time(t), "9:05 AM");
/// ```
pub fn format_clock_time(t: NaiveTime) -> String {
    let (is_pm, hour) = t.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, t.minute(), suffix)
}

/// Current local wall-clock time, formatted for display
pub fn current_clock_time() -> String {
    format_clock_time(Local::now().time())
}
