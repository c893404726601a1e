//! HTTP server setup and the consumer handler.

use axum::{extract::State, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::backend::BackendClient;
use crate::config::ConsumerConfig;
use crate::error::ConsumerError;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Name of the environment variable holding the backend address.
    pub backend_var: String,
    pub client: BackendClient,
}

/// HTTP server for the consumer.
pub struct HttpServer {
    router: Router,
    backend_var: String,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ConsumerConfig) -> Self {
        let backend_var = config.backend.variable();
        let state = AppState {
            backend_var: backend_var.clone(),
            client: BackendClient::new(),
        };

        let router = Self::build_router(state);
        Self { router, backend_var }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(consumer_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the process is killed.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend_var = %self.backend_var,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }
}

/// Read the backend address as it is right now. Unset reads as empty.
fn current_backend(var: &str) -> String {
    std::env::var_os(var)
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Ask the backend for its message and relay it.
///
/// A backend that cannot be connected to, or that hangs up before
/// answering, is reported in the body with a 200; every other failure
/// becomes a 500.
async fn consumer_handler(State(state): State<AppState>) -> Result<String, ConsumerError> {
    let backend = current_backend(&state.backend_var);

    match state.client.fetch(&backend).await {
        Ok(says) => {
            tracing::debug!(backend = %backend, bytes = says.len(), "Backend answered");
            Ok(format!("I am the consumer. The backend {} says: {}", backend, says))
        }
        Err(e) if e.is_connection_failure() => {
            tracing::warn!(backend = %backend, error = %e, "Backend unreachable");
            Ok(format!("I am the consumer. The backend {} doesn't work: {}", backend, e))
        }
        Err(source) => Err(ConsumerError::Backend { backend, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_backend_unset_is_empty() {
        assert_eq!(current_backend("MESH_CONSUMER_UNIT_NEVER_SET"), "");
    }

    #[test]
    fn test_current_backend_reads_live_value() {
        let var = "MESH_CONSUMER_UNIT_LIVE";
        std::env::set_var(var, "first:1");
        assert_eq!(current_backend(var), "first:1");
        std::env::set_var(var, "second:2");
        assert_eq!(current_backend(var), "second:2");
        std::env::remove_var(var);
    }

    #[test]
    fn test_server_reads_linked_backend_var() {
        let mut config = ConsumerConfig::default();
        config.backend.linked_name = Some("orders".into());
        let server = HttpServer::new(config);
        assert_eq!(server.backend_var, "BACKEND_orders");
    }
}
