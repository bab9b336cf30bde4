//! Common types used across the gateway

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Coordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Astronomical convention used by the timings provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CalculationMethod(u8);

impl CalculationMethod {
    pub const DEFAULT: CalculationMethod = CalculationMethod(2);

    /// Highest method id accepted from callers
    pub const MAX_ID: u8 = 99;

    pub fn id(&self) -> u8 {
        self.0
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for CalculationMethod {
    type Error = &'static str;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(0..=i64::from(Self::MAX_ID)).contains(&value) {
            return Err("Calculation method must be between 0 and 99");
        }
        Ok(CalculationMethod(value as u8))
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated request for one day of prayer timings
#[derive(Debug, Clone, PartialEq)]
pub struct TimingsQuery {
    pub coordinates: Coordinates,
    pub date: NaiveDate,
    pub method: CalculationMethod,
}

impl TimingsQuery {
    /// Date in the `DD-MM-YYYY` form the timings provider expects in its path
    pub fn provider_date(&self) -> String {
        self.date.format("%d-%m-%Y").to_string()
    }
}
