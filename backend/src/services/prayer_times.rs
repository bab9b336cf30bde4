//! Prayer times service: validate the location, fetch the day, pick the next prayer

use serde::Deserialize;
use shared::{
    non_empty, parse_coordinate, parse_method, parse_query_date, validate_latitude,
    validate_longitude, CalculationMethod, Coordinates, DailyTimings, PrayerTimesResponse,
    TimingsQuery,
};
use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{AppError, AppResult, PRAYER_TIMES_FAILED};
use crate::external::TimingsProvider;

pub const MISSING_COORDINATES: &str = "Missing latitude or longitude parameters.";

/// Query parameters of `GET /getPrayerTimes`, kept as text until validated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrayerTimesParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// `YYYY-MM-DD`; defaults to today
    pub date: Option<String>,
    pub method: Option<String>,
}

/// Prayer times service
#[derive(Clone)]
pub struct PrayerTimesService {
    provider: Arc<dyn TimingsProvider>,
    clock: Arc<dyn Clock>,
    default_method: CalculationMethod,
}

impl PrayerTimesService {
    pub fn new(
        provider: Arc<dyn TimingsProvider>,
        clock: Arc<dyn Clock>,
        default_method: CalculationMethod,
    ) -> Self {
        Self {
            provider,
            clock,
            default_method,
        }
    }

    /// Validate caller input. Nothing is fetched when this fails.
    pub fn build_query(&self, params: &PrayerTimesParams) -> AppResult<TimingsQuery> {
        let (Some(lat), Some(lon)) = (
            non_empty(params.lat.as_deref()),
            non_empty(params.lon.as_deref()),
        ) else {
            return Err(AppError::validation("lat/lon", MISSING_COORDINATES));
        };

        let latitude = parse_coordinate(lat).map_err(|m| AppError::validation("lat", m))?;
        validate_latitude(latitude).map_err(|m| AppError::validation("lat", m))?;

        let longitude = parse_coordinate(lon).map_err(|m| AppError::validation("lon", m))?;
        validate_longitude(longitude).map_err(|m| AppError::validation("lon", m))?;

        let date = match non_empty(params.date.as_deref()) {
            Some(raw) => parse_query_date(raw).map_err(|m| AppError::validation("date", m))?,
            None => self.clock.now().date_naive(),
        };

        let method = match non_empty(params.method.as_deref()) {
            Some(raw) => parse_method(raw).map_err(|m| AppError::validation("method", m))?,
            None => self.default_method,
        };

        Ok(TimingsQuery {
            coordinates: Coordinates::new(latitude, longitude),
            date,
            method,
        })
    }

    /// Fetch one day of timings and compute the next prayer
    pub async fn get_prayer_times(
        &self,
        params: &PrayerTimesParams,
    ) -> AppResult<PrayerTimesResponse> {
        let query = self.build_query(params)?;

        tracing::info!(
            "Fetching prayer times for ({}, {}) on {} with method {}",
            query.coordinates.latitude,
            query.coordinates.longitude,
            query.date,
            query.method
        );

        let day = self.provider.fetch_day(&query).await?;
        let timings = DailyTimings::from_raw(&day.timings, &day.timezone)
            .map_err(|e| AppError::upstream(PRAYER_TIMES_FAILED, e.to_string()))?;

        let response = timings.schedule(self.clock.now());
        tracing::debug!(
            "Next prayer in {} is {} at {}",
            timings.timezone,
            response.next_prayer,
            response.next_prayer_time
        );

        Ok(response)
    }
}
