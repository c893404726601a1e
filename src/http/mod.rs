//! HTTP surface of the consumer.
//!
//! # Data Flow
//! ```text
//! GET /
//!     → server.rs (TraceLayer span, consumer handler)
//!     → backend::BackendClient (one outbound GET)
//!     → 200 text/plain, or 500 via ConsumerError
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
