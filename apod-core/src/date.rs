//! Random APOD date selection

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Earliest date the panel draws from
pub const EARLIEST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2010, 2, 1) {
    Some(date) => date,
    None => panic!("invalid earliest APOD date"),
};

/// Format used by the API's `date` parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pick a random date between [`EARLIEST_DATE`] and now, formatted `YYYY-MM-DD`.
///
/// The draw is uniform over the millisecond span, not over calendar days.
pub fn random_date() -> String {
    let start = EARLIEST_DATE.and_time(NaiveTime::MIN).and_utc();
    random_date_between(start, Utc::now(), rand::random::<f64>())
}

/// Date at `fraction` (0.0..=1.0) of the way from `start` to `end`.
///
/// An empty or inverted span yields `start`.
pub fn random_date_between(start: DateTime<Utc>, end: DateTime<Utc>, fraction: f64) -> String {
    let span_ms = (end - start).num_milliseconds().max(0);
    let offset_ms = (span_ms as f64 * fraction.clamp(0.0, 1.0)) as i64;

    (start + Duration::milliseconds(offset_ms.min(span_ms)))
        .format(DATE_FORMAT)
        .to_string()
}
