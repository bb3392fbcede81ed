//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mergington_domain::error::MergingtonError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`MergingtonError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(MergingtonError);

impl From<MergingtonError> for ApiError {
    fn from(err: MergingtonError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            MergingtonError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            MergingtonError::Conflict(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MergingtonError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MergingtonError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use mergington_domain::email::Email;
    use mergington_domain::error::{ConflictError, NotFoundError};

    async fn detail_of(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["detail"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn should_map_not_found_to_404() {
        let err = MergingtonError::from(NotFoundError {
            entity: "Activity",
            key: "Nonexistent Club".to_string(),
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(detail_of(response).await, "Activity not found");
    }

    #[tokio::test]
    async fn should_map_conflict_to_400() {
        let err = MergingtonError::from(ConflictError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: Email::from("michael@mergington.edu"),
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(detail_of(response).await.contains("already signed up"));
    }

    #[tokio::test]
    async fn should_hide_storage_details() {
        let err = MergingtonError::Storage("disk on fire".into());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail_of(response).await, "internal server error");
    }
}
