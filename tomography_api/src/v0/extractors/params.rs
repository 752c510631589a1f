use crate::v0::error::ApiError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

const STATION_ID: &str = "station_id";
const STATION_LINK_ID: &str = "station_link_id";
const START_TIME: &str = "start_time";
const END_TIME: &str = "end_time";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// Every parameter arrives as an optional string so that each endpoint can report exactly
// which field is missing or malformed.
#[derive(Debug, Default, Deserialize)]
struct RawParams {
    station_id: Option<String>,
    station_link_id: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
}

impl RawParams {
    async fn extract<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<Self, ApiError> {
        let Query(params) = Query::<RawParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::validation("query", e.body_text()))?;
        Ok(params)
    }
}

/// `?station_id=...`
#[derive(Debug, Clone)]
pub struct StationParams {
    pub station_id: String,
}

/// `?station_id=...[&start_time=...][&end_time=...]`
#[derive(Debug, Clone)]
pub struct StationWindowParams {
    pub station_id: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

/// `?station_link_id=<integer>`
#[derive(Debug, Clone)]
pub struct StationLinkParams {
    pub station_link_id: i64,
}

impl<S> FromRequestParts<S> for StationParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawParams::extract(parts, state).await?;
        Ok(Self {
            station_id: required(STATION_ID, params.station_id)?,
        })
    }
}

impl<S> FromRequestParts<S> for StationWindowParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawParams::extract(parts, state).await?;
        Ok(Self {
            station_id: required(STATION_ID, params.station_id)?,
            start_time: optional_timestamp(START_TIME, params.start_time)?,
            end_time: optional_timestamp(END_TIME, params.end_time)?,
        })
    }
}

impl<S> FromRequestParts<S> for StationLinkParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawParams::extract(parts, state).await?;
        let raw = required(STATION_LINK_ID, params.station_link_id)?;
        let station_link_id = raw.trim().parse::<i64>().map_err(|_| {
            ApiError::validation(STATION_LINK_ID, format!("`{raw}` is not a valid integer"))
        })?;
        Ok(Self { station_link_id })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::validation(field, "missing required parameter"))
}

fn optional_timestamp(
    field: &str,
    value: Option<String>,
) -> Result<Option<NaiveDateTime>, ApiError> {
    value
        .map(|raw| {
            parse_timestamp(&raw).ok_or_else(|| {
                ApiError::validation(field, format!("`{raw}` is not a valid ISO-8601 datetime"))
            })
        })
        .transpose()
}

/// Parses an ISO-8601 date or datetime into the naive form used by the data store.
/// An offset is dropped and the wall-clock digits kept, the same frame as the stored columns
/// and the default window; a bare date means midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
