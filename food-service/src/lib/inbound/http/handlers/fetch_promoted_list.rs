use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::admin::ports::AdminServicePort;
use crate::inbound::http::router::AppState;

/// Promoted restaurant ids, in display order.
pub async fn fetch_promoted_list(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<String>>, ApiError> {
    state
        .admin_service
        .fetch_promoted_list()
        .await
        .map_err(ApiError::from)
        .map(|ids| {
            let promoted: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            ApiSuccess::new(StatusCode::OK, promoted)
        })
}
