//! Validation utilities for gateway inputs
//!
//! All checks here run before any provider is called.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::CalculationMethod;

// ============================================================================
// Location Validations
// ============================================================================

/// Parse a decimal-degree coordinate as sent in a query string
pub fn parse_coordinate(raw: &str) -> Result<Decimal, &'static str> {
    Decimal::from_str(raw.trim()).map_err(|_| "Coordinate must be a decimal number")
}

pub fn validate_latitude(latitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

pub fn validate_longitude(longitude: Decimal) -> Result<(), &'static str> {
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Timings Options
// ============================================================================

/// Parse a `YYYY-MM-DD` date
pub fn parse_query_date(raw: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| "Date must be in YYYY-MM-DD format")
}

pub fn parse_method(raw: &str) -> Result<CalculationMethod, &'static str> {
    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "Calculation method must be an integer")?;
    CalculationMethod::try_from(id)
}

// ============================================================================
// Chat Validations
// ============================================================================

/// A chat message must be present and contain more than whitespace
pub fn validate_chat_message(message: Option<&str>) -> Result<&str, &'static str> {
    match message {
        Some(m) if !m.trim().is_empty() => Ok(m),
        _ => Err("Missing message parameter."),
    }
}

/// Treat `Some("")` and `Some("   ")` the same as a missing parameter
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("21.4225").unwrap(), dec("21.4225"));
        assert_eq!(parse_coordinate(" -33.8688 ").unwrap(), dec("-33.8688"));
        assert!(parse_coordinate("north").is_err());
        assert!(parse_coordinate("").is_err());
    }

    #[test]
    fn test_latitude_bounds() {
        assert!(validate_latitude(dec("90")).is_ok());
        assert!(validate_latitude(dec("-90")).is_ok());
        assert!(validate_latitude(dec("21.4225")).is_ok());
        assert!(validate_latitude(dec("90.0001")).is_err());
        assert!(validate_latitude(dec("-91")).is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(validate_longitude(dec("180")).is_ok());
        assert!(validate_longitude(dec("-180")).is_ok());
        assert!(validate_longitude(dec("39.8262")).is_ok());
        assert!(validate_longitude(dec("180.5")).is_err());
    }

    #[test]
    fn test_parse_query_date() {
        assert_eq!(
            parse_query_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(parse_query_date("01-01-2024").is_err());
        assert!(parse_query_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("4").unwrap().id(), 4);
        assert!(parse_method("four").is_err());
        assert!(parse_method("250").is_err());
    }

    #[test]
    fn test_chat_message() {
        assert_eq!(validate_chat_message(Some("salam")).unwrap(), "salam");
        assert!(validate_chat_message(None).is_err());
        assert!(validate_chat_message(Some("")).is_err());
        assert!(validate_chat_message(Some("  \n")).is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("1")), Some("1"));
        assert_eq!(non_empty(Some(" ")), None);
        assert_eq!(non_empty(None), None);
    }
}
