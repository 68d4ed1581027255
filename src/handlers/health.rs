// src/handlers/health.rs
// DOCUMENTATION: Liveness probe
// PURPOSE: Report whether the cafe table can be read

use crate::db::CafeRepository;
use crate::errors::CafeError;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    cafes: i64,
}

/// GET /health
/// A store that cannot be queried surfaces as 503 through CafeError
pub async fn health_check(pool: web::Data<SqlitePool>) -> Result<impl Responder, CafeError> {
    let cafes = CafeRepository::count(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        cafes,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
