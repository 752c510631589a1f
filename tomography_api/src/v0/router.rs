use crate::state::AppState;
use crate::v0::handlers::measurements::{
    get_current, get_max_snr, get_sde, get_sdr, get_temperature,
};
use crate::v0::handlers::stations::get_stations;
use axum::Router;
use axum::routing::get;

// Each collection answers with and without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::<AppState>::new()
        .route("/stations", get(get_stations))
        .route("/stations/", get(get_stations))
        .route("/maxsnr", get(get_max_snr))
        .route("/maxsnr/", get(get_max_snr))
        .route("/sde", get(get_sde))
        .route("/sde/", get(get_sde))
        .route("/sdr", get(get_sdr))
        .route("/sdr/", get(get_sdr))
        .route("/temperature", get(get_temperature))
        .route("/temperature/", get(get_temperature))
        .route("/current", get(get_current))
        .route("/current/", get(get_current))
}
