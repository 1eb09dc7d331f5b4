//! HTTP routes over the shared [`Directory`].
//!
//! ```text
//! GET    /health
//! GET    /activities
//! POST   /activities/:activity_name/signup?email=<email>
//! DELETE /activities/:activity_name/participants?email=<email>
//! ```
//!
//! Successful mutations answer `{"message": ...}`; failures answer
//! `{"detail": ...}` with a 404 for unknown activities or participants and a
//! 400 for every other rejected signup.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use roster_core::{Catalog, Directory, DirectoryError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
}

impl AppState {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: String,
}

/// Build the router. Handlers only translate between HTTP and the directory.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(signup))
        .route("/activities/:activity_name/participants", delete(unregister))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": state.directory.len(),
    }))
}

async fn list_activities(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.directory.list_activities())
}

async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.directory.signup(&activity_name, &query.email)?;
    tracing::info!(activity = %activity_name, email = %query.email.trim(), "participant signed up");
    Ok(Json(MessageResponse { message }))
}

async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.directory.unregister(&activity_name, &query.email)?;
    tracing::info!(activity = %activity_name, email = %query.email.trim(), "participant unregistered");
    Ok(Json(MessageResponse { message }))
}

/// A directory failure on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DirectoryError::ActivityNotFound { .. } | DirectoryError::ParticipantNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            DirectoryError::AlreadySignedUp { .. }
            | DirectoryError::ActivityFull { .. }
            | DirectoryError::InvalidEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self.0, "request rejected");
        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(AppState::new(Arc::new(Directory::seeded())))
    }

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_activity_count() {
        let (status, body) = send(&test_router(), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["activities"], 3);
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_404() {
        let (status, body) = send(
            &test_router(),
            Method::POST,
            "/activities/Knitting/signup?email=a%40b.example",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("Activity not found"));
    }

    #[tokio::test]
    async fn signup_blank_email_is_400() {
        let (status, _) = send(
            &test_router(),
            Method::POST,
            "/activities/Chess%20Club/signup?email=%20",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_email_query_is_rejected() {
        let (status, _) = send(&test_router(), Method::POST, "/activities/Chess%20Club/signup").await;
        assert!(status.is_client_error(), "got {status}");
    }

    #[test]
    fn status_mapping() {
        let not_found = ApiError(DirectoryError::ParticipantNotFound {
            activity: "Chess Club".into(),
            email: "x@y".into(),
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        let full = ApiError(DirectoryError::ActivityFull {
            activity: "Chess Club".into(),
            capacity: 12,
        });
        assert_eq!(full.status(), StatusCode::BAD_REQUEST);
    }
}
