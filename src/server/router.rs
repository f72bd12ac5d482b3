//! Router builder for order routes

use crate::server::handlers::{
    AppState, create_order, get_order_by_id, get_orders_after_business_days, get_recent_orders,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build order routes
///
/// - POST /api/orders - Create an order
/// - GET /api/orders/recent - Orders entered in the last 24 hours
/// - GET /api/orders/specificOrder?id={id} - Orders with the given id
/// - GET /api/orders/ordersBasedOnNumberOfWorkingDays/{days} - Orders after a business-day cutoff
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders/recent", get(get_recent_orders))
        .route("/api/orders/specificOrder", get(get_order_by_id))
        .route(
            "/api/orders/ordersBasedOnNumberOfWorkingDays/{days}",
            get(get_orders_after_business_days),
        )
        .with_state(state)
}
