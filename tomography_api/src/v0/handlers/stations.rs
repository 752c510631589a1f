use crate::store::Datastore;
use crate::v0::api_models::Station;
use crate::v0::assembly::assemble_stations;
use crate::v0::error::ApiError;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

pub async fn get_stations(
    State(store): State<Arc<dyn Datastore>>,
) -> Result<Json<Vec<Station>>, ApiError> {
    let mut conn = store.acquire().await?;
    let stations = assemble_stations(conn.as_mut()).await?;
    conn.release().await;
    Ok(Json(stations))
}
