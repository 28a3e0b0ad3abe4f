//! REST endpoints driving the onboarding wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use super::edit::DraftEdit;
use super::interests::{INTEREST_TAXONOMY, InterestCategory};
use super::manager::OnboardingManager;
use super::model::QUESTION_PROMPTS;
use crate::error::{EditError, TransitionError};

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub manager: Arc<OnboardingManager>,
}

/// Static content the client needs to render the selectable options.
#[derive(Serialize)]
struct Taxonomy {
    interests: &'static [InterestCategory],
    questions: &'static [&'static str],
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "match-onboarding"
    }))
}

/// GET /api/onboarding/status
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.status().await)
}

/// GET /api/onboarding/taxonomy
async fn get_taxonomy() -> impl IntoResponse {
    Json(Taxonomy {
        interests: INTEREST_TAXONOMY,
        questions: &QUESTION_PROMPTS,
    })
}

/// POST /api/onboarding/edit
///
/// Applies one `DraftEdit`. 409 once the draft has been submitted.
async fn post_edit(
    State(state): State<OnboardingRouteState>,
    Json(edit): Json<DraftEdit>,
) -> Response {
    match state.manager.edit(edit).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e @ EditError::DraftConsumed) => error_response(StatusCode::CONFLICT, &e.to_string(), None),
    }
}

/// POST /api/onboarding/advance
async fn post_advance(State(state): State<OnboardingRouteState>) -> Response {
    match state.manager.advance().await {
        Ok(status) => Json(status).into_response(),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/onboarding/retreat
async fn post_retreat(State(state): State<OnboardingRouteState>) -> Response {
    match state.manager.retreat().await {
        Ok(status) => Json(status).into_response(),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/onboarding/restart
async fn post_restart(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.restart().await)
}

fn transition_error_response(err: TransitionError) -> Response {
    match err {
        TransitionError::Incomplete { step } => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &err.to_string(),
            Some(serde_json::json!({ "step": step })),
        ),
        TransitionError::AtStart | TransitionError::Finished => {
            error_response(StatusCode::CONFLICT, &err.to_string(), None)
        }
        TransitionError::Submission(ref e) => {
            warn!(error = %e, "Returning submission failure to client");
            error_response(
                StatusCode::BAD_GATEWAY,
                &err.to_string(),
                Some(serde_json::json!({ "retryable": e.is_retryable() })),
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str, extra: Option<serde_json::Value>) -> Response {
    let mut body = serde_json::json!({ "error": message });
    if let (Some(obj), Some(serde_json::Value::Object(extra))) = (body.as_object_mut(), extra) {
        obj.extend(extra);
    }
    (status, Json(body)).into_response()
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/taxonomy", get(get_taxonomy))
        .route("/api/onboarding/edit", post(post_edit))
        .route("/api/onboarding/advance", post(post_advance))
        .route("/api/onboarding/retreat", post(post_retreat))
        .route("/api/onboarding/restart", post(post_restart))
        .with_state(state)
}
