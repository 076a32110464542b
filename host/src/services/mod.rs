//! HTTP surface of the host.
//!
//! - `GET /config.json`: the `ClientConfig` the browser client boots with.
//! - anything else: the embedded frontend bundle (`assets`).

pub mod assets;
mod client_config;

use actix_web::web::{get, resource};
use actix_web::Resource;
use common::config::CONFIG_PATH;

pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(client_config::process))
}
