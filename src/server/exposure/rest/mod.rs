//! REST API exposure for the order service
//!
//! Consumes an [`OrderService`] and produces an Axum `Router` with the order
//! routes, health checks, request tracing and panic recovery.

use crate::core::{ErrorResponse, OrderService};
use crate::server::handlers::AppState;
use crate::server::router::build_order_routes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Body message for requests that panicked
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Arguments
    ///
    /// * `service` - The order service backing every route
    /// * `custom_routes` - Additional routes to merge (stateless routers)
    pub fn build_router(service: OrderService, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(build_order_routes(AppState { service }));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http())
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "orders-api"
        }))
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "An unexpected error occurred.");

    let body = ErrorResponse {
        code: "INTERNAL_ERROR".to_string(),
        message: UNEXPECTED_ERROR_MESSAGE.to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
