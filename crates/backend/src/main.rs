use backend::domain::{a001_part_catalog, a002_finding};
use backend::shared::{config, data::db};
use backend::{routes, system};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;

    db::initialize_database(&config::get_database_path(&config)).await?;
    a002_finding::service::initialize(config.reference.clone())?;
    a001_part_catalog::service::initialize(
        &config::get_catalog_path(&config),
        config.catalog.page_size,
    )?;

    let app = routes::configure_routes();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("KITTEO backend listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
