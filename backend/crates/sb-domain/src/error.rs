use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use sb_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Already checked in on {date} {location}")]
    AlreadyCheckedIn {
        date: NaiveDate,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("{entity} not found {location}")]
    NotFound {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("Storage unavailable: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl DomainError {
    /// Creates AlreadyCheckedIn error at caller location.
    #[track_caller]
    pub fn already_checked_in(date: NaiveDate) -> Self {
        Self::AlreadyCheckedIn {
            date,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound {
            entity,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for DomainError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
