use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};

use beerstock_core::BeerId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// `GET /:key` resolves by name; `DELETE` and `PATCH` resolve by id. The
/// segment shares one name because the router requires it.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/:key", get(find_by_name).delete(delete_by_id))
        .route("/:key/increment", patch(increment))
        .route("/:key/decrement", patch(decrement))
}

pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateBeerRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return invalid_body(e),
    };

    let candidate = match body.into_new_beer() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.beers.create(candidate) {
        Ok(beer) => (StatusCode::CREATED, Json(dto::BeerResponse::from(&beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn find_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.beers.find_by_name(&name) {
        Ok(beer) => (StatusCode::OK, Json(dto::BeerResponse::from(&beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn list_all(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let beers: Vec<dto::BeerResponse> = services
        .beers
        .list_all()
        .iter()
        .map(dto::BeerResponse::from)
        .collect();

    Json(beers)
}

pub async fn delete_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.beers.delete_by_id(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn increment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::QuantityRequest>, JsonRejection>,
) -> axum::response::Response {
    let (id, amount) = match parse_adjustment(&id, body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.beers.increment(id, amount) {
        Ok(beer) => (StatusCode::OK, Json(dto::BeerResponse::from(&beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn decrement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::QuantityRequest>, JsonRejection>,
) -> axum::response::Response {
    let (id, amount) = match parse_adjustment(&id, body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.beers.decrement(id, amount) {
        Ok(beer) => (StatusCode::OK, Json(dto::BeerResponse::from(&beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

fn parse_adjustment(
    id: &str,
    body: Result<Json<dto::QuantityRequest>, JsonRejection>,
) -> Result<(BeerId, u32), axum::response::Response> {
    let id: BeerId = id.parse().map_err(errors::domain_error_to_response)?;
    let Json(body) = body.map_err(invalid_body)?;
    let amount = body.into_amount().map_err(errors::domain_error_to_response)?;
    Ok((id, amount))
}

fn invalid_body(rejection: JsonRejection) -> axum::response::Response {
    errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}
