//! Conversions between wire scalars and domain values
//!
//! Dates travel as seconds since the Unix epoch; everything else crosses the
//! wire in its final shape.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};

/// Convert epoch seconds from the wire into a UTC timestamp.
pub(crate) fn datetime_from_epoch(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::remote_failure(format!("timestamp {secs} out of range")))
}

/// Convert epoch seconds into a calendar date.
///
/// Birth dates carry no meaningful time of day, so they surface as a plain
/// date even though the wire encodes them like any other timestamp.
pub(crate) fn date_from_epoch(secs: i64) -> Result<NaiveDate> {
    datetime_from_epoch(secs).map(|dt| dt.date_naive())
}
