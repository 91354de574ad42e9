use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::fetch_categories::fetch_categories;
use super::handlers::fetch_items::fetch_items;
use super::handlers::fetch_promoted_list::fetch_promoted_list;
use super::handlers::fetch_restaurants::fetch_restaurants;
use super::handlers::fetch_users::fetch_users;
use super::handlers::login::login;
use super::handlers::register::register;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::catalog::ports::CatalogServicePort;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub catalog_service: Arc<dyn CatalogServicePort>,
    pub admin_service: Arc<dyn AdminServicePort>,
}

pub fn create_router(
    account_service: Arc<dyn AccountServicePort>,
    catalog_service: Arc<dyn CatalogServicePort>,
    admin_service: Arc<dyn AdminServicePort>,
    body_limit_bytes: usize,
) -> Router {
    let state = AppState {
        account_service,
        catalog_service,
        admin_service,
    };

    let account_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/fetch-users", get(fetch_users));

    let catalog_routes = Router::new()
        .route("/fetch-restaurants", get(fetch_restaurants))
        .route("/fetch-items", get(fetch_items))
        .route("/fetch-categories", get(fetch_categories))
        .route("/fetch-promoted-list", get(fetch_promoted_list));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(account_routes)
        .merge(catalog_routes)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
