//! Types shared between the browser client and the host binary.
//!
//! - `model`: payloads exchanged with the remote news service.
//! - `config`: runtime configuration the host publishes to the client.

pub mod config;
pub mod model;
