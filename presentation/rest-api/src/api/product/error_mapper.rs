use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::InvalidPage => (StatusCode::BAD_REQUEST, "Invalid page number"),
            ProductError::InvalidSort => (StatusCode::BAD_REQUEST, "Invalid sort direction"),
            ProductError::Populate(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to populate database",
            ),
            ProductError::Fetch(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch products",
            ),
            ProductError::Count(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch products for count",
            ),
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
