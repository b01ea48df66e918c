//! Health check and build information endpoints

use crate::server::state::AppState;
use crate::utils::error::{RelayError, Result};
use actix_web::{HttpResponse, web};
use tracing::{debug, error};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .route("/version", web::get().to(version))
        .route("/fail", web::get().to(fail));
}

/// Pings the database
async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    debug!("Health check requested");

    let status = state.storage.health_check().await;
    if !status.overall {
        return Err(RelayError::server("Database unreachable"));
    }
    Ok(HttpResponse::Ok().body("OK"))
}

async fn version(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().body(state.build().to_string())
}

/// Always fails, so uptime alarms can be verified end to end
async fn fail() -> Result<HttpResponse> {
    error!("Forced failure requested");
    Err(RelayError::internal("Forced failure"))
}
