//! Access to the data store, one connection per request.
//!
//! [`Datastore::acquire`] opens a fresh connection that the caller owns for the
//! lifetime of a single request. [`StoreConnection::release`] closes it cleanly;
//! dropping it on an early return closes it as well.
//!
//! Numeric columns are read as DOUBLE (see `v0::db::queries`), whatever their storage type.

use crate::v0::api_models::{
    CurrentRecord, MaxSnrRecord, SdeRecord, SdrRecord, StationLink, StationRecord,
    TemperatureRecord,
};
use crate::v0::db::queries;
use crate::v0::error::QueryError;
use crate::v0::window::TimeWindow;
use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};
use tracing::{debug, instrument, warn};

#[async_trait]
pub trait Datastore: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn StoreConnection>, QueryError>;
}

#[async_trait]
pub trait StoreConnection: Send {
    async fn stations(&mut self) -> Result<Vec<StationRecord>, QueryError>;

    async fn links_for_station(
        &mut self,
        station_id: &str,
    ) -> Result<Vec<StationLink>, QueryError>;

    async fn max_snr(&mut self, station_id: &str) -> Result<Vec<MaxSnrRecord>, QueryError>;

    async fn sde(
        &mut self,
        station_id: &str,
        window: TimeWindow,
    ) -> Result<Vec<SdeRecord>, QueryError>;

    async fn sdr(
        &mut self,
        station_id: &str,
        window: TimeWindow,
    ) -> Result<Vec<SdrRecord>, QueryError>;

    async fn temperature(
        &mut self,
        station_link_id: i64,
    ) -> Result<Vec<TemperatureRecord>, QueryError>;

    async fn current(&mut self, station_link_id: i64) -> Result<Vec<CurrentRecord>, QueryError>;

    /// Closes the connection. Failures are logged, the connection is gone either way.
    async fn release(self: Box<Self>);
}

/// Opens and closes one connection, so a server never starts against an unreachable store.
pub async fn check_reachable(store: &dyn Datastore) -> Result<(), QueryError> {
    store.acquire().await?.release().await;
    Ok(())
}

pub struct MySqlDatastore {
    options: MySqlConnectOptions,
}

impl MySqlDatastore {
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl Datastore for MySqlDatastore {
    #[instrument(skip(self))]
    async fn acquire(&self) -> Result<Box<dyn StoreConnection>, QueryError> {
        let conn = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(QueryError::Connect)?;
        debug!("acquired data store connection");
        Ok(Box::new(MySqlStoreConnection { conn }))
    }
}

pub struct MySqlStoreConnection {
    conn: MySqlConnection,
}

#[async_trait]
impl StoreConnection for MySqlStoreConnection {
    async fn stations(&mut self) -> Result<Vec<StationRecord>, QueryError> {
        queries::list_stations(&mut self.conn).await
    }

    async fn links_for_station(
        &mut self,
        station_id: &str,
    ) -> Result<Vec<StationLink>, QueryError> {
        queries::list_links_for_station(&mut self.conn, station_id).await
    }

    async fn max_snr(&mut self, station_id: &str) -> Result<Vec<MaxSnrRecord>, QueryError> {
        queries::list_max_snr(&mut self.conn, station_id).await
    }

    async fn sde(
        &mut self,
        station_id: &str,
        window: TimeWindow,
    ) -> Result<Vec<SdeRecord>, QueryError> {
        queries::list_sde(&mut self.conn, station_id, window).await
    }

    async fn sdr(
        &mut self,
        station_id: &str,
        window: TimeWindow,
    ) -> Result<Vec<SdrRecord>, QueryError> {
        queries::list_sdr(&mut self.conn, station_id, window).await
    }

    async fn temperature(
        &mut self,
        station_link_id: i64,
    ) -> Result<Vec<TemperatureRecord>, QueryError> {
        queries::list_temperature(&mut self.conn, station_link_id).await
    }

    async fn current(&mut self, station_link_id: i64) -> Result<Vec<CurrentRecord>, QueryError> {
        queries::list_current(&mut self.conn, station_link_id).await
    }

    async fn release(self: Box<Self>) {
        match self.conn.close().await {
            Ok(()) => debug!("released data store connection"),
            Err(e) => warn!(error = ?e, "failed to close data store connection cleanly"),
        }
    }
}
