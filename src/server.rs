//! HTTP server for the task service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::errors::TaskError;
use crate::service::TaskService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Task orchestration service.
    pub service: Arc<TaskService>,
}

/// Build the HTTP router for the task service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", post(create_task).get(list_tasks))
        .route("/tasks/{id}", get(get_task))
        .route("/tasks/{id}/start", post(start_timer))
        .route("/tasks/{id}/stop", post(stop_timer))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Request body for task creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskRequest {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_by: Option<String>,
}

/// Create a task with an inferred priority.
async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let task = state
        .service
        .create_task(&request.title, &request.description, request.created_by)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Task added", "task": task })),
    ))
}

/// List all tasks.
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let tasks = state.service.list_tasks().await?;
    Ok(Json(json!({ "tasks": tasks })))
}

/// Fetch a single task.
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let task = state.service.get_task(&id).await?;
    Ok(Json(json!({ "task": task })))
}

/// Start the work timer on a task.
async fn start_timer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let task = state.service.start_timer(&id).await?;
    Ok(Json(json!({ "message": "Task timer started", "task": task })))
}

/// Stop the work timer and report accumulated minutes.
async fn stop_timer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let outcome = state.service.stop_timer(&id).await?;
    Ok(Json(json!({
        "message": "Task timer stopped",
        "timeSpentMinutes": outcome.task.time_spent_minutes,
        "elapsedMinutes": outcome.elapsed_minutes,
        "task": outcome.task
    })))
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Translates core errors into transport responses.
pub struct ApiError(TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TaskError::Validation { .. } | TaskError::EmptyTrainingSet => StatusCode::BAD_REQUEST,
            TaskError::TaskNotFound { .. } => StatusCode::NOT_FOUND,
            TaskError::TimerNotStarted { .. } => StatusCode::CONFLICT,
            TaskError::ModelNotReady => StatusCode::SERVICE_UNAVAILABLE,
            TaskError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, status = %status, "Request rejected");
        }

        (
            status,
            Json(json!({ "status": "error", "error": self.0.to_string() })),
        )
            .into_response()
    }
}
