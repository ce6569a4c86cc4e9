use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::report::ReportError;
use super::service::{IntelligenceError, IntelligenceService};
use super::sources::{SourceError, SourceKind};

/// Selector choice submitted by the report trigger.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    pub source: SourceKind,
    pub selection: String,
}

/// Router builder exposing selector options, the report table, and its CSV download.
pub fn intelligence_router(service: Arc<IntelligenceService>) -> Router {
    Router::new()
        .route("/api/v1/intelligence/sources", get(sources_handler))
        .route("/api/v1/intelligence/report", post(report_handler))
        .route("/api/v1/intelligence/report.csv", get(export_handler))
        .with_state(service)
}

pub(crate) async fn sources_handler(State(service): State<Arc<IntelligenceService>>) -> Response {
    match service.sources() {
        Ok(sources) => (StatusCode::OK, Json(json!({ "sources": sources }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<IntelligenceService>>,
    Json(request): Json<ReportRequest>,
) -> Response {
    match service.generate(request.source, &request.selection) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler(
    State(service): State<Arc<IntelligenceService>>,
    Query(request): Query<ReportRequest>,
) -> Response {
    match service.export(request.source, &request.selection) {
        Ok(export) => {
            let disposition = export.content_disposition();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, export.mime.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.bytes,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: IntelligenceError) -> Response {
    let status = match &error {
        IntelligenceError::SourceUnavailable(_) => StatusCode::NOT_FOUND,
        IntelligenceError::Report(ReportError::Source(SourceError::UnknownScenario(_))) => {
            StatusCode::BAD_REQUEST
        }
        IntelligenceError::Report(ReportError::Source(SourceError::Row { .. })) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        IntelligenceError::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    warn!(%status, error = %error, "intelligence report request failed");
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
