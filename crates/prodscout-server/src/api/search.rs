use axum::{extract::State, Extension, Json};

use prodscout_core::{ScoredCandidate, SearchRequest};
use prodscout_pipeline::run_product_search;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// POST `/api/v1/search`: run the discovery pipeline for one category.
pub(super) async fn run_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ApiResponse<Vec<ScoredCandidate>>>, ApiError> {
    if request.product_category.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "product_category must not be empty",
        ));
    }

    let ranked = run_product_search(&state.deps, &request).await.map_err(|e| {
        tracing::error!(error = %e, category = %request.product_category, "product search failed");
        ApiError::new(req_id.0.clone(), "internal_error", "product search failed")
    })?;

    Ok(Json(ApiResponse {
        data: ranked,
        meta: ResponseMeta::new(req_id.0),
    }))
}
