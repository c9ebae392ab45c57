mod prompt;
mod routes;
mod vision;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use routes::configure_routes;
use std::env;
use vision::VisionClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    let frontend_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        format!("{}/../frontend/dist", manifest_dir)
    } else {
        "/usr/src/app/frontend/dist".to_string()
    };

    let vision_client = match VisionClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to configure vision client: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Vision client configuration failed: {}", e),
            ));
        }
    };
    log::info!("Analysis schema: {}", vision_client.schema());

    let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(vision_client.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
