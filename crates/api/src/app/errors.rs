use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use beerstock_core::DomainError;
use beerstock_inventory::StockError;

pub fn stock_error_to_response(err: StockError) -> axum::response::Response {
    let (status, code) = match &err {
        StockError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        StockError::AlreadyRegistered(_) => (StatusCode::BAD_REQUEST, "already_registered"),
        StockError::StockExceeded { .. } => (StatusCode::BAD_REQUEST, "stock_exceeded"),
        StockError::NegativeQuantity { .. } => (StatusCode::BAD_REQUEST, "negative_quantity"),
    };
    json_error(status, code, err.to_string())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": status.as_u16(),
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use beerstock_core::BeerId;

    #[test]
    fn stock_errors_map_to_client_statuses() {
        let id = BeerId::new();
        let cases = [
            (StockError::not_found_by_id(id), StatusCode::NOT_FOUND),
            (StockError::not_found_by_name("Skol"), StatusCode::NOT_FOUND),
            (StockError::AlreadyRegistered("Skol".into()), StatusCode::BAD_REQUEST),
            (StockError::StockExceeded { id, amount: 1 }, StatusCode::BAD_REQUEST),
            (StockError::NegativeQuantity { id, amount: 1 }, StatusCode::BAD_REQUEST),
        ];

        for (err, expected) in cases {
            assert_eq!(stock_error_to_response(err).status(), expected);
        }
    }

    #[test]
    fn domain_errors_are_bad_requests() {
        let res = domain_error_to_response(DomainError::validation("name cannot be empty"));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = domain_error_to_response(DomainError::invalid_id("BeerId: bad"));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
