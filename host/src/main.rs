mod config;
mod services;

use crate::config::HostConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                error!("could not open browser at {}: {}", url, err);
            }
        });
    }

    info!("Server running at {}", url);
    info!("Client will talk to {}", config.client.api_origin);

    let client = web::Data::new(config.client.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .service(services::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
