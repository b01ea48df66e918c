//! Pull, push and status-check endpoints

use crate::core::invite::Invitation;
use crate::server::state::AppState;
use crate::utils::error::{RelayError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{error, info, warn};

/// Configure invitation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(pull))
            .route(web::post().to(push)),
    )
    .route("/check", web::get().to(check));
}

/// Fetch pending invitations upstream and process them
async fn pull(state: web::Data<AppState>) -> Result<HttpResponse> {
    let summary = state.service.pull().await.map_err(|e| {
        error!(error = %e, "pull failed");
        e
    })?;

    Ok(HttpResponse::Ok()
        .insert_header(("X-Robots-Tag", "none"))
        .body(format!("Pulled {}", summary.received)))
}

/// Register and grant the invitations in the request body
async fn push(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let invitations: Vec<Invitation> = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "rejecting undecodable push payload");
        RelayError::bad_request(format!("Invalid invitation payload: {}", e))
    })?;

    let summary = state.service.push(invitations).await.map_err(|e| {
        if !e.is_client_error() {
            error!(error = %e, "push failed");
        }
        e
    })?;

    Ok(HttpResponse::Ok().body(format!("Pushed {}", summary.received)))
}

#[derive(Debug, Deserialize)]
struct CheckQuery {
    id: Option<String>,
}

/// Report whether an invitation has a completion timestamp
async fn check(state: web::Data<AppState>, query: web::Query<CheckQuery>) -> Result<HttpResponse> {
    let id = query
        .into_inner()
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RelayError::bad_request("Missing id"))?;

    match state.service.status(&id).await {
        Ok(Some(record)) => match record.processed_at {
            Some(processed_at) => {
                info!(invitation_id = %id, %processed_at, "invitation is processed");
                Ok(HttpResponse::Ok().body(format!("Got a date: {}", processed_at.to_rfc3339())))
            }
            None => Err(RelayError::bad_request("there is no processed_datetime")),
        },
        Ok(None) => Err(RelayError::bad_request("Not processed")),
        Err(e) => {
            error!(invitation_id = %id, error = %e, "status check failed");
            Err(RelayError::bad_request("Not processed"))
        }
    }
}
