use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::{error, info};
use shared::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, looks_like_snake_report, strip_data_uri_prefix};

use crate::vision::VisionClient;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.service(web::resource("/api/analyze").route(web::post().to(handle_analyze)))
        .service(Files::new("/static", frontend_dir).index_file("index.html"));
}

async fn handle_analyze(
    client: web::Data<VisionClient>,
    payload: web::Json<AnalyzeRequest>,
) -> HttpResponse {
    let image = match payload.image.as_deref() {
        Some(image) if !image.is_empty() => image,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "No image provided".into(),
            });
        }
    };

    let base64_image = strip_data_uri_prefix(image);

    match client.analyze_image(base64_image).await {
        Ok(content) => {
            let is_snake_image = looks_like_snake_report(&content);
            info!("Analysis completed (snake report: {})", is_snake_image);
            HttpResponse::Ok().json(AnalyzeResponse {
                success: true,
                content,
                is_snake_image,
            })
        }
        Err(e) => {
            error!("Error processing image: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}
