use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AccountView;
use crate::domain::admin::errors::AdminError;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::FoodItem;
use crate::domain::catalog::models::Restaurant;

pub mod fetch_categories;
pub mod fetch_items;
pub mod fetch_promoted_list;
pub mod fetch_restaurants;
pub mod fetch_users;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "User already exists";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                // Detail stays in the logs, clients get a fixed message.
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorData { message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            // Well-formed JSON with a missing or mistyped field.
            JsonRejection::JsonDataError(_) => ApiError::UnprocessableEntity(rejection.body_text()),
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DuplicateAccount(_) => {
                ApiError::BadRequest(DUPLICATE_ACCOUNT_MESSAGE.to_string())
            }
            AccountError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            AccountError::InvalidUsername(_) | AccountError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AccountError::Password(_)
            | AccountError::DatabaseError(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Account as returned to clients. Never carries the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub usertype: String,
    pub approval: String,
    pub created_at: DateTime<Utc>,
}

impl From<&AccountView> for AccountResponseData {
    fn from(view: &AccountView) -> Self {
        Self {
            id: view.id.to_string(),
            username: view.username.as_str().to_string(),
            email: view.email.as_str().to_string(),
            usertype: view.usertype.as_str().to_string(),
            approval: view.approval.as_str().to_string(),
            created_at: view.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponseData {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub address: Option<String>,
    pub main_img: Option<String>,
    pub menu: Vec<String>,
}

impl From<&Restaurant> for RestaurantResponseData {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id.to_string(),
            owner_id: restaurant.owner_id.to_string(),
            title: restaurant.title.clone(),
            address: restaurant.address.clone(),
            main_img: restaurant.main_img.clone(),
            menu: restaurant.menu.iter().map(|id| id.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemResponseData {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub item_img: Option<String>,
    pub item_type: Option<String>,
    pub menu_category: Option<String>,
    pub category: Option<String>,
    pub restaurant_id: String,
    pub price: f64,
    pub discount: f64,
    pub rating: f64,
}

impl From<&FoodItem> for FoodItemResponseData {
    fn from(item: &FoodItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            item_img: item.item_img.clone(),
            item_type: item.item_type.clone(),
            menu_category: item.menu_category.clone(),
            category: item.category.clone(),
            restaurant_id: item.restaurant_id.to_string(),
            price: item.price,
            discount: item.discount,
            rating: item.rating,
        }
    }
}
