//! Timestamp-to-activity binning.
//!
//! Counts events per time bin so that a stream of timestamps can be scored
//! like any other activity vector. Bins start at the range start and have a
//! fixed width; the final bin ends exactly at the range end and is closed on
//! the right, so it may be narrower than the others. Events outside the range
//! are ignored.

use chrono::NaiveDateTime;
use eph_config::Granularity;
use thiserror::Error;
use tracing::debug;

use crate::logging::{event_names, Stage};

/// Upper bound on the number of bins a single call may allocate.
pub const MAX_BINS: usize = 10_000_000;

/// Errors raised while binning timestamps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinningError {
    #[error("no timestamps to bin and no range given")]
    Empty,

    #[error("timestamp at position {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("range bounds must be finite, got ({start}, {end})")]
    NonFiniteRange { start: f64, end: f64 },

    #[error("range start {start} is after range end {end}")]
    InvertedRange { start: f64, end: f64 },

    #[error("bin width must be finite and positive, got {0}")]
    InvalidWidth(f64),

    #[error("range needs {needed} bins, limit is {limit}")]
    TooManyBins { needed: f64, limit: usize },

    #[error("utc offset {0} hours is outside [-24, 24]")]
    InvalidOffset(f64),
}

/// Bin Unix timestamps (seconds) into an activity vector.
///
/// `range` defaults to the earliest and latest timestamp.
pub fn timestamps_to_activity(
    timestamps: &[f64],
    range: Option<(f64, f64)>,
    granularity: Granularity,
) -> Result<Vec<f64>, BinningError> {
    let width = granularity.bin_width_secs();
    if !width.is_finite() || width <= 0.0 {
        return Err(BinningError::InvalidWidth(width));
    }

    for (index, &value) in timestamps.iter().enumerate() {
        if !value.is_finite() {
            return Err(BinningError::NonFinite { index, value });
        }
    }

    let (start, end) = match range {
        Some(r) => r,
        None => observed_range(timestamps).ok_or(BinningError::Empty)?,
    };
    if !start.is_finite() || !end.is_finite() {
        return Err(BinningError::NonFiniteRange { start, end });
    }
    if start > end {
        return Err(BinningError::InvertedRange { start, end });
    }

    let needed = ((end - start) / width).ceil().max(1.0);
    if needed > MAX_BINS as f64 {
        return Err(BinningError::TooManyBins {
            needed,
            limit: MAX_BINS,
        });
    }
    let bins = needed as usize;

    let mut activity = vec![0.0; bins];
    let mut dropped = 0usize;
    for &t in timestamps {
        if t < start || t > end {
            dropped += 1;
            continue;
        }
        let idx = (((t - start) / width).floor() as usize).min(bins - 1);
        activity[idx] += 1.0;
    }

    debug!(
        target: event_names::BIN_FINISHED,
        stage = %Stage::Bin,
        bins,
        events = timestamps.len() - dropped,
        dropped,
        granularity = %granularity,
        "timestamps binned"
    );
    Ok(activity)
}

/// Bin naive datetimes read at a fixed UTC offset.
///
/// The offset is applied to both the datetimes and the range.
pub fn datetimes_to_activity(
    datetimes: &[NaiveDateTime],
    range: Option<(NaiveDateTime, NaiveDateTime)>,
    granularity: Granularity,
    utc_offset_hours: f64,
) -> Result<Vec<f64>, BinningError> {
    if !(-24.0..=24.0).contains(&utc_offset_hours) {
        return Err(BinningError::InvalidOffset(utc_offset_hours));
    }

    let timestamps: Vec<f64> = datetimes
        .iter()
        .map(|dt| to_unix_seconds(dt, utc_offset_hours))
        .collect();
    let range = range.map(|(s, e)| {
        (
            to_unix_seconds(&s, utc_offset_hours),
            to_unix_seconds(&e, utc_offset_hours),
        )
    });

    timestamps_to_activity(&timestamps, range, granularity)
}

/// Unix seconds for a naive local datetime at `utc_offset_hours` east of UTC.
pub fn to_unix_seconds(datetime: &NaiveDateTime, utc_offset_hours: f64) -> f64 {
    let utc = datetime.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_micros()) / 1e6
        - utc_offset_hours * 3600.0
}

fn observed_range(timestamps: &[f64]) -> Option<(f64, f64)> {
    let first = *timestamps.first()?;
    Some(
        timestamps
            .iter()
            .fold((first, first), |(lo, hi), &t| (lo.min(t), hi.max(t))),
    )
}
