//! Outbound calls to the backend service.
//!
//! # Data Flow
//! ```text
//! backend address (host[:port], read by the handler)
//!     → client.rs (build `http://{address}`, single GET, no retries)
//!     → Ok(body text) | Err(FetchError)
//! ```
//!
//! Only `FetchError::Connect` is meant to be recovered from by callers.

pub mod client;

pub use client::{BackendClient, FetchError};
