use shared::{init_tracing, load_config, mysql_connect_options};
use std::sync::Arc;
use tomography_api::state::AppState;
use tomography_api::store::{MySqlDatastore, check_reachable};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = load_config()?;
    let store = MySqlDatastore::new(mysql_connect_options(&config.mysql));

    // Requests open their own connections; this one only rejects bad credentials early.
    check_reachable(&store).await?;
    info!(
        host = %config.mysql.host,
        database = %config.mysql.database,
        "data store reachable"
    );

    let app = tomography_api::app(AppState::new(Arc::new(store)), &config.cors);

    let listen_addr = config.server.listen_addr.as_str();
    info!("starting server at {listen_addr}");
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shared::shutdown_listener())
        .await?;

    Ok(())
}
