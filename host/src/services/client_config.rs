use actix_web::{web, HttpResponse, Responder};
use common::config::ClientConfig;

/// Returns the configuration registered as app data.
pub async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::config::ClientConfig;

    use crate::services::configure_routes;

    #[actix_web::test]
    async fn publishes_the_configured_origin() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ClientConfig::new("https://news.example")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/config.json").to_request();
        let config: ClientConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(config, ClientConfig::new("https://news.example"));
    }
}
