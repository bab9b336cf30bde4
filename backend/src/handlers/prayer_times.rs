//! HTTP handler for the prayer timings endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use shared::PrayerTimesResponse;

use crate::error::AppResult;
use crate::services::{PrayerTimesParams, PrayerTimesService};
use crate::AppState;

/// Day schedule plus next prayer
/// GET /getPrayerTimes?lat=..&lon=..&date=YYYY-MM-DD&method=..
pub async fn get_prayer_times(
    State(state): State<AppState>,
    params: Result<Query<PrayerTimesParams>, QueryRejection>,
) -> AppResult<Json<PrayerTimesResponse>> {
    let Query(params) = params?;
    let service = PrayerTimesService::new(
        state.timings.clone(),
        state.clock.clone(),
        state.default_method,
    );
    let response = service.get_prayer_times(&params).await?;
    Ok(Json(response))
}
