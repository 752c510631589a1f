use crate::store::StoreConnection;
use crate::v0::api_models::Station;
use crate::v0::error::QueryError;
use tracing::debug;

/// Every station in storage order, each with the links it is the source or destination of.
///
/// Issues one query for the stations and then one link query per station on the same connection.
pub async fn assemble_stations(
    conn: &mut dyn StoreConnection,
) -> Result<Vec<Station>, QueryError> {
    let records = conn.stations().await?;
    let mut stations = Vec::with_capacity(records.len());

    for record in records {
        let links = conn.links_for_station(&record.station_id).await?;
        stations.push(Station::with_links(record, links));
    }

    debug!(count = stations.len(), "assembled stations");
    Ok(stations)
}
