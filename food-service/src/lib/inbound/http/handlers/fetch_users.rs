use axum::extract::State;
use axum::http::StatusCode;

use super::AccountResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn fetch_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AccountResponseData>>, ApiError> {
    state
        .account_service
        .list_accounts()
        .await
        .map_err(ApiError::from)
        .map(|accounts| {
            let users: Vec<AccountResponseData> =
                accounts.iter().map(|a| (&a.view()).into()).collect();
            ApiSuccess::new(StatusCode::OK, users)
        })
}
