//! Raw time series lookups. Each handler validates its parameters before touching the store,
//! holds one connection for the duration of the request and returns rows in storage order.

use crate::store::Datastore;
use crate::v0::api_models::{
    CurrentRecord, MaxSnrRecord, SdeRecord, SdrRecord, TemperatureRecord,
};
use crate::v0::error::ApiError;
use crate::v0::extractors::params::{StationLinkParams, StationParams, StationWindowParams};
use crate::v0::window::{TimeWindow, local_now};
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::debug;

pub async fn get_max_snr(
    State(store): State<Arc<dyn Datastore>>,
    params: StationParams,
) -> Result<Json<Vec<MaxSnrRecord>>, ApiError> {
    let mut conn = store.acquire().await?;
    let rows = conn.max_snr(&params.station_id).await?;
    conn.release().await;
    Ok(Json(rows))
}

pub async fn get_sde(
    State(store): State<Arc<dyn Datastore>>,
    params: StationWindowParams,
) -> Result<Json<Vec<SdeRecord>>, ApiError> {
    let window = TimeWindow::resolve(params.start_time, params.end_time, local_now());
    debug!(station_id = %params.station_id, ?window, "querying sde");

    let mut conn = store.acquire().await?;
    let rows = conn.sde(&params.station_id, window).await?;
    conn.release().await;
    Ok(Json(rows))
}

pub async fn get_sdr(
    State(store): State<Arc<dyn Datastore>>,
    params: StationWindowParams,
) -> Result<Json<Vec<SdrRecord>>, ApiError> {
    let window = TimeWindow::resolve(params.start_time, params.end_time, local_now());
    debug!(station_id = %params.station_id, ?window, "querying sdr");

    let mut conn = store.acquire().await?;
    let rows = conn.sdr(&params.station_id, window).await?;
    conn.release().await;
    Ok(Json(rows))
}

pub async fn get_temperature(
    State(store): State<Arc<dyn Datastore>>,
    params: StationLinkParams,
) -> Result<Json<Vec<TemperatureRecord>>, ApiError> {
    let mut conn = store.acquire().await?;
    let rows = conn.temperature(params.station_link_id).await?;
    conn.release().await;
    Ok(Json(rows))
}

pub async fn get_current(
    State(store): State<Arc<dyn Datastore>>,
    params: StationLinkParams,
) -> Result<Json<Vec<CurrentRecord>>, ApiError> {
    let mut conn = store.acquire().await?;
    let rows = conn.current(params.station_link_id).await?;
    conn.release().await;
    Ok(Json(rows))
}
