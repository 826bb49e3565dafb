use actix_web::{web, HttpResponse};
use crate::handlers::normalize_handler;

async fn health() -> HttpResponse {
    log::info!("Health check");
    HttpResponse::Ok().body("OK")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/normalize", web::post().to(normalize_handler::normalize_submission))
        .route("/health", web::get().to(health));
}
