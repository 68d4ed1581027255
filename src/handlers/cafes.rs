// src/handlers/cafes.rs
// DOCUMENTATION: HTTP handlers for cafe operations
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::errors::CafeError;
use crate::models::{
    Acknowledgment, AddCafeForm, ApiKeyQuery, CafeEnvelope, LocationQuery, PriceQuery,
};
use crate::services::CafeService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// GET /random
/// One cafe picked at random
pub async fn random_cafe(pool: web::Data<SqlitePool>) -> Result<impl Responder, CafeError> {
    let cafe = CafeService::random_cafe(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(CafeEnvelope { cafe }))
}

/// GET /all
/// Every cafe, unpaginated
pub async fn all_cafes(pool: web::Data<SqlitePool>) -> Result<impl Responder, CafeError> {
    let cafes = CafeService::all_cafes(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(CafeEnvelope { cafe: cafes }))
}

/// GET /search?loc=
/// Cafes at an exact location
pub async fn search_cafes(
    pool: web::Data<SqlitePool>,
    query: web::Query<LocationQuery>,
) -> Result<impl Responder, CafeError> {
    let cafes = CafeService::search_by_location(pool.get_ref(), query.loc.as_deref()).await?;
    Ok(HttpResponse::Ok().json(CafeEnvelope { cafe: cafes }))
}

/// POST /add
/// Create a cafe from form fields
pub async fn add_cafe(
    pool: web::Data<SqlitePool>,
    form: web::Form<AddCafeForm>,
) -> Result<impl Responder, CafeError> {
    CafeService::add_cafe(pool.get_ref(), form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Acknowledgment::new(
        "success",
        "Successfully added the new cafe.",
    )))
}

/// PATCH /update-price/{id}?new_price=
pub async fn update_price(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    query: web::Query<PriceQuery>,
) -> Result<impl Responder, CafeError> {
    CafeService::update_price(pool.get_ref(), path.into_inner(), query.new_price.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(Acknowledgment::new(
        "Success",
        "Successfully updated the price.",
    )))
}

/// DELETE /report-closed/{id}?api-key=
/// Remove a cafe that has closed down
pub async fn report_closed(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    path: web::Path<i64>,
    query: web::Query<ApiKeyQuery>,
) -> Result<impl Responder, CafeError> {
    CafeService::report_closed(
        pool.get_ref(),
        &config.api_key,
        path.into_inner(),
        query.api_key.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(Acknowledgment::new(
        "Success",
        "Successfully deleted the cafe from the database.",
    )))
}

/// Extractor failures render through CafeError like every other error
fn bad_request(err: impl std::fmt::Display) -> actix_web::Error {
    log::debug!("Rejected malformed request: {}", err);
    CafeError::BadRequest(err.to_string()).into()
}

/// Configuration for cafe routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::FormConfig::default().error_handler(|err, _req| bad_request(err)));

    cfg.route("/random", web::get().to(random_cafe))
        .route("/all", web::get().to(all_cafes))
        .route("/search", web::get().to(search_cafes))
        .route("/add", web::post().to(add_cafe))
        .route("/update-price/{id}", web::patch().to(update_price))
        .route("/update-price/{id}", web::get().to(update_price))
        .route("/report-closed/{id}", web::delete().to(report_closed));
}
