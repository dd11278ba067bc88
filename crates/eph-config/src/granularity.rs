//! Time-bin width used when turning timestamps into activity vectors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SECONDS_WEEK: f64 = 604_800.0;
pub const SECONDS_DAY: f64 = 86_400.0;
pub const SECONDS_HOUR: f64 = 3_600.0;

/// Width of one activity bin.
///
/// Written as `week`, `day`, `hour`, or a custom multiple such as `2d` or
/// `0.5h`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Granularity {
    Week,
    #[default]
    Day,
    Hour,
    /// A custom number of days.
    Days(f64),
    /// A custom number of hours.
    Hours(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid granularity {0:?}: expected week, day, hour, <n>d or <n>h")]
pub struct ParseGranularityError(pub String);

impl Granularity {
    /// Bin width in seconds.
    pub fn bin_width_secs(&self) -> f64 {
        match self {
            Granularity::Week => SECONDS_WEEK,
            Granularity::Day => SECONDS_DAY,
            Granularity::Hour => SECONDS_HOUR,
            Granularity::Days(n) => n * SECONDS_DAY,
            Granularity::Hours(n) => n * SECONDS_HOUR,
        }
    }
}

fn parse_multiple(s: &str) -> Option<f64> {
    let n: f64 = s.parse().ok()?;
    (n.is_finite() && n > 0.0).then_some(n)
}

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s {
            "week" => Some(Granularity::Week),
            "day" => Some(Granularity::Day),
            "hour" => Some(Granularity::Hour),
            _ => {
                if let Some(n) = s.strip_suffix('d') {
                    parse_multiple(n).map(Granularity::Days)
                } else if let Some(n) = s.strip_suffix('h') {
                    parse_multiple(n).map(Granularity::Hours)
                } else {
                    None
                }
            }
        };
        parsed.ok_or_else(|| ParseGranularityError(s.to_string()))
    }
}

impl TryFrom<String> for Granularity {
    type Error = ParseGranularityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Granularity> for String {
    fn from(g: Granularity) -> Self {
        g.to_string()
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Week => write!(f, "week"),
            Granularity::Day => write!(f, "day"),
            Granularity::Hour => write!(f, "hour"),
            Granularity::Days(n) => write!(f, "{}d", n),
            Granularity::Hours(n) => write!(f, "{}h", n),
        }
    }
}
