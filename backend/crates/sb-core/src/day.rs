use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer};

/// Rule for collapsing an instant to the calendar day it belongs to.
///
/// "One check-in per day" is only meaningful relative to a boundary; the
/// rule is chosen in configuration rather than assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayBoundary {
    #[default]
    Utc,
    Local,
    Fixed(FixedOffset),
}

impl DayBoundary {
    /// Calendar day `instant` falls on under this boundary rule.
    pub fn date_key(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Utc => instant.date_naive(),
            Self::Local => instant.with_timezone(&Local).date_naive(),
            Self::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }
}

impl FromStr for DayBoundary {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            other => other
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| CoreError::InvalidDayBoundary {
                    value: s.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
        }
    }
}

impl<'de> Deserialize<'de> for DayBoundary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DayBoundary::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utc => write!(f, "utc"),
            Self::Local => write!(f, "local"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
