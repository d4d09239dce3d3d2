use crate::core::engine::ElectionEngine;
use crate::core::runner::ProcessRunner;
use crate::domain::model::{BallotPayload, ElectionResult};
use crate::utils::error::{BridgeError, Result};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const LANDING_PAGE: &str = include_str!("../../static/index.html");
const UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ElectionEngine<ProcessRunner>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/tideman", post(run_tideman))
        .route("/healthz", get(healthz))
        .route("/", get(home))
        .with_state(state)
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT))
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct WinnerResponse {
    winner: String,
    stdout: String,
    stderr: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stderr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ErrorResponse {
    fn bare(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            stdout: None,
            stderr: None,
            rc: None,
            detail: None,
        }
    }
}

async fn run_tideman(State(state): State<AppState>, req: Request) -> Response {
    let payload = match extract_payload(req).await {
        Ok(payload) => payload,
        Err(err) => return err.into_response(),
    };

    match state.engine.run(payload).await {
        Ok(result) => compose(result),
        Err(err) => err.into_response(),
    }
}

/// Normalizes the two accepted request shapes into one ballot payload:
/// a multipart `file` field, or a JSON body with a `csv` field. A multipart
/// request without a `file` field degrades to the empty-payload rejection,
/// matching the JSON fall-through.
async fn extract_payload(req: Request) -> Result<BallotPayload> {
    if is_multipart(&req) {
        let mut multipart =
            Multipart::from_request(req, &()).await.map_err(|err| BridgeError::MultipartError {
                message: err.to_string(),
            })?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| BridgeError::MultipartError { message: err.to_string() })?
        {
            if field.name() == Some("file") {
                let data = field
                    .bytes()
                    .await
                    .map_err(|err| BridgeError::MultipartError { message: err.to_string() })?;
                return BallotPayload::from_upload(&data);
            }
        }
        Err(BridgeError::EmptyPayloadError)
    } else {
        let body = Bytes::from_request(req, &())
            .await
            .map_err(|_| BridgeError::EmptyPayloadError)?;
        BallotPayload::from_json_body(&body)
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Maps the resolver outcome onto the wire contract. Success needs both a zero
/// exit code and an extracted winner; the two failure causes share one response
/// shape but are logged apart.
fn compose(result: ElectionResult) -> Response {
    if result.is_success() {
        let ElectionResult { winner, outcome } = result;
        return (
            StatusCode::OK,
            Json(WinnerResponse {
                winner: winner.unwrap_or_default(),
                stdout: outcome.stdout,
                stderr: outcome.stderr,
            }),
        )
            .into_response();
    }

    if result.outcome.exit_code != 0 {
        tracing::warn!(exit_code = result.outcome.exit_code, "resolver exited non-zero");
    } else {
        tracing::warn!("no winner line in resolver output");
    }

    BridgeError::ResolverFailedError {
        stdout: result.outcome.stdout,
        stderr: result.outcome.stderr,
        exit_code: result.outcome.exit_code,
    }
    .into_response()
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            BridgeError::EmptyPayloadError => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::bare("CSV payload is empty"),
            ),
            BridgeError::MultipartError { message } => {
                tracing::warn!("rejecting upload: {}", message);
                (StatusCode::BAD_REQUEST, ErrorResponse::bare(message))
            }
            BridgeError::ResolverFailedError {
                stdout,
                stderr,
                exit_code,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "tideman failed".to_string(),
                    stdout: Some(stdout),
                    stderr: Some(stderr),
                    rc: Some(exit_code),
                    detail: None,
                },
            ),
            err @ (BridgeError::LaunchError { .. } | BridgeError::TimeoutError { .. }) => {
                tracing::error!("resolver invocation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        detail: Some(err.to_string()),
                        ..ErrorResponse::bare("tideman failed")
                    },
                )
            }
            err => {
                tracing::error!("request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::bare("internal error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

async fn home() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ResolverOutcome;

    fn result(winner: Option<&str>, exit_code: i32) -> ElectionResult {
        ElectionResult {
            winner: winner.map(str::to_string),
            outcome: ResolverOutcome {
                stdout: "out".to_string(),
                stderr: "err".to_string(),
                exit_code,
            },
        }
    }

    #[test]
    fn test_compose_success_needs_winner_and_zero_exit() {
        assert_eq!(compose(result(Some("Alice"), 0)).status(), StatusCode::OK);
        assert_eq!(
            compose(result(Some("Bob"), 1)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            compose(result(None, 0)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_empty_payload_maps_to_400() {
        let response = BridgeError::EmptyPayloadError.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_timeout_maps_to_500() {
        let response = BridgeError::TimeoutError { timeout_secs: 10 }.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
