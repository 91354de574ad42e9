use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::FoodItemResponseData;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn fetch_items(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<FoodItemResponseData>>, ApiError> {
    state
        .catalog_service
        .list_food_items()
        .await
        .map_err(ApiError::from)
        .map(|items| {
            let item_data: Vec<FoodItemResponseData> = items.iter().map(|i| i.into()).collect();
            ApiSuccess::new(StatusCode::OK, item_data)
        })
}
