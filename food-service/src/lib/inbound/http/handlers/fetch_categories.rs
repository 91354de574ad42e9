use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::admin::ports::AdminServicePort;
use crate::inbound::http::router::AppState;

pub async fn fetch_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<String>>, ApiError> {
    state
        .admin_service
        .fetch_categories()
        .await
        .map_err(ApiError::from)
        .map(|categories| ApiSuccess::new(StatusCode::OK, categories))
}
