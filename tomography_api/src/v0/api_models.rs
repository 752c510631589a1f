use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A `stations` row before its links are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StationRecord {
    pub station_id: String,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StationLink {
    pub link_id: String,
    pub link_name: Option<String>,
    pub source_station_id: String,
    pub dest_station_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub station_links: Vec<StationLink>,
}

impl Station {
    /// Attaches `links` in the order given, keeping only the first link seen for each `link_id`.
    pub fn with_links(record: StationRecord, links: Vec<StationLink>) -> Self {
        let mut seen = HashSet::with_capacity(links.len());
        let station_links = links
            .into_iter()
            .filter(|link| seen.insert(link.link_id.clone()))
            .collect();

        Self {
            station_id: record.station_id,
            name: record.name,
            lat: record.lat,
            lon: record.lon,
            station_links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MaxSnrRecord {
    pub station_id: String,
    pub timestamp: NaiveDateTime,
    #[sqlx(rename = "value")]
    pub max_snr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SdeRecord {
    pub station_id: String,
    pub timestamp: NaiveDateTime,
    #[sqlx(rename = "value")]
    pub sde: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SdrRecord {
    pub station_id: String,
    pub timestamp: NaiveDateTime,
    #[sqlx(rename = "value")]
    pub sdr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemperatureRecord {
    pub station_link_id: i64,
    pub timestamp: NaiveDateTime,
    #[sqlx(rename = "value")]
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CurrentRecord {
    pub station_link_id: i64,
    pub timestamp: NaiveDateTime,
    #[sqlx(rename = "value")]
    pub current: f64,
    pub direction: Option<f64>,
}
