//! mesh-consumer
//!
//! ```text
//!   client ── GET / ──▶ consumer ── GET http://$BACKEND ──▶ backend
//!          ◀── "I am the consumer. The backend ... says: ..." ──
//! ```

use tokio::net::TcpListener;

use mesh_consumer::config;
use mesh_consumer::observability::logging;
use mesh_consumer::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_from_env()?;

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_var = %config.backend.variable(),
        "mesh-consumer v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
