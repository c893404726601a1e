//! Observability subsystem.
//!
//! Logs only: `tracing` events with structured fields, written to stdout by
//! `tracing-subscriber`.

pub mod logging;
