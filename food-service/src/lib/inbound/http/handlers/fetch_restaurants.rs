use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::RestaurantResponseData;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn fetch_restaurants(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RestaurantResponseData>>, ApiError> {
    state
        .catalog_service
        .list_restaurants()
        .await
        .map_err(ApiError::from)
        .map(|restaurants| {
            let restaurant_data: Vec<RestaurantResponseData> =
                restaurants.iter().map(|r| r.into()).collect();
            ApiSuccess::new(StatusCode::OK, restaurant_data)
        })
}
