//! Errors raised while normalizing provider data

use thiserror::Error;

/// A timings payload that cannot be turned into a [`crate::DailyTimings`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimingsError {
    #[error("{prayer} time '{value}' is not a valid HH:MM time")]
    InvalidTime { prayer: &'static str, value: String },

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
}
