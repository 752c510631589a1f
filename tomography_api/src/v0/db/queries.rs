use crate::v0::api_models::{
    CurrentRecord, MaxSnrRecord, SdeRecord, SdrRecord, StationLink, StationRecord,
    TemperatureRecord,
};
use crate::v0::error::QueryError;
use crate::v0::window::TimeWindow;
use sqlx::MySqlConnection;

// Numeric columns are cast to DOUBLE so FLOAT, DOUBLE and DECIMAL schemas all decode as f64.

const STATIONS: &str = r"
    SELECT station_id, name, CAST(lat AS DOUBLE) AS lat, CAST(lon AS DOUBLE) AS lon
    FROM stations
    ";

const LINKS_FOR_STATION: &str = r"
    SELECT link_id, link_name, source_station_id, dest_station_id
    FROM station_links
    WHERE source_station_id = ? OR dest_station_id = ?
    ";

const MAX_SNR: &str = r"
    SELECT station_id, timestamp, CAST(value AS DOUBLE) AS value
    FROM max_snr
    WHERE station_id = ?
    ";

const SDE: &str = r"
    SELECT station_id, timestamp, CAST(value AS DOUBLE) AS value
    FROM sde
    WHERE station_id = ? AND timestamp BETWEEN ? AND ?
    ";

const SDR: &str = r"
    SELECT station_id, timestamp, CAST(value AS DOUBLE) AS value
    FROM sdr
    WHERE station_id = ? AND timestamp BETWEEN ? AND ?
    ";

const TEMPERATURE: &str = r"
    SELECT station_link_id, timestamp, CAST(value AS DOUBLE) AS value
    FROM temperature
    WHERE station_link_id = ?
    ";

const CURRENT: &str = r"
    SELECT station_link_id, timestamp, CAST(value AS DOUBLE) AS value,
           CAST(direction AS DOUBLE) AS direction
    FROM `current`
    WHERE station_link_id = ?
    ";

pub async fn list_stations(conn: &mut MySqlConnection) -> Result<Vec<StationRecord>, QueryError> {
    sqlx::query_as::<_, StationRecord>(STATIONS)
        .fetch_all(conn)
        .await
        .map_err(QueryError::Sql)
}

/// Links where `station_id` is either end. A self-loop row is returned once.
pub async fn list_links_for_station(
    conn: &mut MySqlConnection,
    station_id: &str,
) -> Result<Vec<StationLink>, QueryError> {
    sqlx::query_as::<_, StationLink>(LINKS_FOR_STATION)
        .bind(station_id)
        .bind(station_id)
        .fetch_all(conn)
        .await
        .map_err(QueryError::Sql)
}

pub async fn list_max_snr(
    conn: &mut MySqlConnection,
    station_id: &str,
) -> Result<Vec<MaxSnrRecord>, QueryError> {
    sqlx::query_as::<_, MaxSnrRecord>(MAX_SNR)
        .bind(station_id)
        .fetch_all(conn)
        .await
        .map_err(QueryError::Sql)
}

pub async fn list_sde(
    conn: &mut MySqlConnection,
    station_id: &str,
    window: TimeWindow,
) -> Result<Vec<SdeRecord>, QueryError> {
    sqlx::query_as::<_, SdeRecord>(SDE)
        .bind(station_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(conn)
        .await
        .map_err(QueryError::Sql)
}

pub async fn list_sdr(
    conn: &mut MySqlConnection,
    station_id: &str,
    window: TimeWindow,
) -> Result<Vec<SdrRecord>, QueryError> {
    sqlx::query_as::<_, SdrRecord>(SDR)
        .bind(station_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(conn)
        .await
        .map_err(QueryError::Sql)
}

pub async fn list_temperature(
    conn: &mut MySqlConnection,
    station_link_id: i64,
) -> Result<Vec<TemperatureRecord>, QueryError> {
    sqlx::query_as::<_, TemperatureRecord>(TEMPERATURE)
        .bind(station_link_id)
        .fetch_all(conn)
        .await
        .map_err(QueryError::Sql)
}

pub async fn list_current(
    conn: &mut MySqlConnection,
    station_link_id: i64,
) -> Result<Vec<CurrentRecord>, QueryError> {
    sqlx::query_as::<_, CurrentRecord>(CURRENT)
        .bind(station_link_id)
        .fetch_all(conn)
        .await
        .map_err(QueryError::Sql)
}
