use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

mod addresses;

pub use addresses::{local_url, network_urls};

/// Fails unless `root` holds a bundled app, i.e. has an `index.html`.
pub fn check_app_root(root: &Path) -> anyhow::Result<()> {
    if !root.join("index.html").is_file() {
        anyhow::bail!(
            "no index.html in {}, run `dx bundle --package task_symphony_web --release` first",
            root.display()
        );
    }
    Ok(())
}

/// Creates the router serving the app directory: `/` is the main page, every
/// other path is looked up as a file under `root`.
pub fn create_router(root: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(root.join("index.html")))
        .fallback_service(ServeDir::new(root))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: ServerConfig) -> anyhow::Result<()> {
    check_app_root(&config.root)?;
    let server_address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(server_address).await?;

    tracing::info!(root = %config.root.display(), "Server running at:");
    tracing::info!("- Local: {}", local_url(config.port));
    for url in network_urls(addresses::interface_addresses(), config.port) {
        tracing::info!("- Network: {}", url);
    }

    axum::serve(listener, create_router(&config.root)).await?;
    Ok(())
}
