use crate::dtos::{
    GenerateKmlBatchRequest, GenerateKmlBatchResponse, GenerateKmlRequest, GenerateKmlResponse,
    ValidateKmlRequest, ValidateKmlResponse,
};
use crate::services::validator;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

/// Generate one KML document from a natural-language query.
pub async fn generate_kml(
    State(state): State<AppState>,
    body: Option<Json<GenerateKmlRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let Some(Json(request)) = body else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Request body must be JSON"
        )));
    };

    let query = request.query.as_deref().unwrap_or("").trim().to_string();
    if query.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Query parameter is required"
        )));
    }

    tracing::info!(%query, "Generating KML");

    let kml = state.generator.generate(&query).await?;

    Ok(Json(GenerateKmlResponse { kml }))
}

/// Generate KML for multiple queries, isolating per-item failures.
pub async fn generate_kml_batch(
    State(state): State<AppState>,
    body: Option<Json<GenerateKmlBatchRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let Some(Json(request)) = body else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Request body must be JSON"
        )));
    };

    let Some(queries) = request.queries else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "queries array is required"
        )));
    };

    if queries.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "queries must be a non-empty array"
        )));
    }

    tracing::info!(count = queries.len(), "Generating KML batch");

    let outcome = state.generator.generate_batch(&queries).await;

    Ok(Json(GenerateKmlBatchResponse::from(outcome)))
}

/// Run the structural check against caller-supplied KML and report the
/// boolean outcome rather than rejecting.
pub async fn validate_kml(
    body: Option<Json<ValidateKmlRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let Some(Json(request)) = body else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Request body must be JSON"
        )));
    };

    let Some(kml) = request.kml else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "kml parameter is required"
        )));
    };

    let kml = kml.trim();

    Ok(Json(ValidateKmlResponse {
        valid: validator::is_valid_kml(kml),
        length: kml.chars().count(),
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "available_endpoints": [
                "GET /health",
                "POST /generate-kml",
                "POST /generate-kml-batch",
                "POST /validate-kml"
            ]
        })),
    )
}
