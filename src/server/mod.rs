//! Local preview server for the built site

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Koyo;

/// Router serving the output directory as static files
pub fn router(output_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(output_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Resolve the listen address, mapping `localhost` to the loopback address
pub fn bind_addr(ip: &str, port: u16) -> Result<SocketAddr> {
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    format!("{}:{}", bind_ip, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", ip, port))
}

/// Serve the output directory until interrupted
pub async fn start(koyo: &Koyo, ip: &str, port: u16) -> Result<()> {
    let addr = bind_addr(ip, port)?;
    let app = router(&koyo.output_dir);

    println!("🚀 Serving site at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
