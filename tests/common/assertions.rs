//! Domain-specific assertions for dtrack harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which normalization invariant was violated.

use chrono::NaiveDateTime;
use dtrack_core::TrackingInfo;

/// Assert that a record is a failure carrying the expected message.
///
/// ```rust
/// assert_failed_record!(info, "HTTP 404: Request failed");
/// ```
#[macro_export]
macro_rules! assert_failed_record {
    ($info:expr, $message:expr) => {{
        let info: &dtrack_core::TrackingInfo = &$info;
        let expected: &str = $message;
        match info.error.as_deref() {
            Some(actual) if actual.starts_with(expected) => {}
            Some(actual) => panic!(
                "assert_failed_record! failed:\n  expected prefix: {:?}\n  actual:          {:?}",
                expected, actual
            ),
            None => panic!(
                "assert_failed_record! failed: record has no error.\n  record: {:?}",
                info
            ),
        }
    }};
}

/// A failure record keeps every display field at its zero value.
pub fn assert_zero_valued(info: &TrackingInfo) {
    let blank = TrackingInfo {
        error: info.error.clone(),
        ..TrackingInfo::default()
    };
    pretty_assertions::assert_eq!(info, &blank, "failure record leaked display data");
    assert!(info.error.is_some(), "failure record must carry an error");
}

/// Every rendered date is "N/A", parses back with the display layout
/// (`DD Mon YYYY, HH:MM AM/PM`), or is one of the listed `pass_through` values.
pub fn assert_dates_rendered(info: &TrackingInfo, pass_through: &[&str]) {
    let dates = [&info.status_date, &info.booking_date, &info.estimated_delivery]
        .into_iter()
        .chain(info.milestones.iter().map(|m| &m.date_time))
        .chain(info.timeline.iter().map(|e| &e.date_time));
    for date in dates {
        let rendered = date == "N/A"
            || NaiveDateTime::parse_from_str(date, "%d %b %Y, %I:%M %p").is_ok()
            || pass_through.contains(&date.as_str());
        assert!(rendered, "not a rendered date: {date:?}");
    }
}
