//! Single-shot HTTP client for the backend.

use std::error::Error as StdError;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

/// Why a backend call did not produce a body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// `http://{address}` is not a usable request URI.
    #[error("invalid backend url '{url}': {source}")]
    InvalidAddress {
        url: String,
        #[source]
        source: axum::http::Error,
    },

    /// The TCP connection could not be established (refused, unreachable,
    /// name resolution).
    #[error("{}", error_chain(.0))]
    Connect(hyper_util::client::legacy::Error),

    /// The backend closed the connection before a complete response.
    #[error("{}", error_chain(.0))]
    Disconnected(hyper_util::client::legacy::Error),

    /// The exchange failed for any other reason.
    #[error("backend request failed: {0}")]
    Request(#[source] hyper_util::client::legacy::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {0}")]
    Status(StatusCode),

    /// Reading the response body failed midway.
    #[error("failed to read backend body: {0}")]
    Body(#[source] axum::Error),
}

impl FetchError {
    /// True when no usable connection to the backend existed: it could not
    /// be opened, or it was dropped before the response was complete.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, FetchError::Connect(_) | FetchError::Disconnected(_))
    }

    fn from_client(e: hyper_util::client::legacy::Error) -> Self {
        if e.is_connect() {
            FetchError::Connect(e)
        } else if closed_early(&e) {
            FetchError::Disconnected(e)
        } else {
            FetchError::Request(e)
        }
    }
}

/// Whether a hyper error in the chain says the peer went away mid-exchange.
fn closed_early(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(hyper_err) = e.downcast_ref::<hyper::Error>() {
            if hyper_err.is_incomplete_message() || hyper_err.is_closed() {
                return true;
            }
        }
        current = e.source();
    }
    false
}

/// Render an error followed by each of its sources, `outer: inner: ...`.
fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

/// HTTP client for the backend.
///
/// Keeps no idle connections and never re-sends a request, so every call
/// is exactly one attempt over a fresh connection.
#[derive(Clone)]
pub struct BackendClient {
    client: Client<HttpConnector, Body>,
}

impl BackendClient {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new())
            .retry_canceled_requests(false)
            .pool_max_idle_per_host(0)
            .build(HttpConnector::new());

        Self { client }
    }

    /// GET `http://{address}` and return the body as text.
    ///
    /// `address` is substituted verbatim; nothing is escaped or checked
    /// beyond what URI parsing rejects.
    pub async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let url = format!("http://{}", address);

        let request = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header("user-agent", concat!("mesh-consumer/", env!("CARGO_PKG_VERSION")))
            .body(Body::empty())
            .map_err(|source| FetchError::InvalidAddress {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(url = %url, "Calling backend");

        let response = self
            .client
            .request(request)
            .await
            .map_err(FetchError::from_client)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let bytes = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
            .await
            .map_err(FetchError::Body)?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
