//! A consumer service: on `GET /` it calls the backend named by `BACKEND`
//! once and relays what the backend said.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;

pub use config::ConsumerConfig;
pub use error::ConsumerError;
pub use http::HttpServer;
