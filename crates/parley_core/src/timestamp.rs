//! Timestamp labels - Display-time formatting of message times
//!
//! Send times are stored as UTC instants and only turned into text at
//! render time, relative to the viewer's clock. A message sent on the
//! viewer's current calendar day reads "Today at HH:mm"; anything older
//! (or newer) reads "MM/dd/yyyy HH:mm". The stored instant never changes,
//! so the same message can render differently from one day to the next.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format `sent_at` relative to an explicit "now" in the viewer's zone.
///
/// Same-day comparison happens on calendar dates in `now`'s timezone, so a
/// message from 23:59 renders as "Today at 23:59" one minute and as
/// "MM/dd/yyyy 23:59" the next.
pub fn timestamp_label_at<Tz: TimeZone>(sent_at: DateTime<Utc>, now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = sent_at.with_timezone(&now.timezone());
    if local.date_naive() == now.date_naive() {
        format!("Today at {}", local.format("%H:%M"))
    } else {
        local.format("%m/%d/%Y %H:%M").to_string()
    }
}

/// Format `sent_at` against the system clock and local timezone.
pub fn timestamp_label(sent_at: DateTime<Utc>) -> String {
    timestamp_label_at(sent_at, Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_label() {
        let sent_at = Utc.with_ymd_and_hms(2024, 3, 14, 15, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 0).unwrap();
        assert_eq!(timestamp_label_at(sent_at, now), "Today at 15:30");
    }

    #[test]
    fn test_other_day_label() {
        let sent_at = Utc.with_ymd_and_hms(2024, 3, 13, 9, 5, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap();
        assert_eq!(timestamp_label_at(sent_at, now), "03/13/2024 09:05");
    }

    #[test]
    fn test_midnight_rollover() {
        // One minute before and after midnight land on different labels.
        let sent_at = Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 30).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 30).unwrap();
        assert_eq!(timestamp_label_at(sent_at, before), "Today at 23:59");
        assert_eq!(timestamp_label_at(sent_at, after), "03/14/2024 23:59");
    }

    #[test]
    fn test_zero_padding() {
        let sent_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(timestamp_label_at(sent_at, now), "01/02/2024 03:04");
    }
}
