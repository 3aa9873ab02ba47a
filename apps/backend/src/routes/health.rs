use actix_web::{web, HttpResponse};

use crate::error::AppError;

/// Liveness probe. There is no database or downstream dependency in this
/// app, so "up" is the only state worth reporting.
async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
