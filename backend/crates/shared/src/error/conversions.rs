//! Error conversions - framework integrations for [`AppError`]

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_into_response_status() {
        let response = AppError::bad_request("username is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::not_found("Not Found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::method_not_allowed("Method Not Allowed").into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
