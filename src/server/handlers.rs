//! HTTP handlers for order operations
//!
//! Handlers translate service outcomes into responses: an empty result set
//! becomes a 404 with a fixed message, service errors render through
//! [`OrderError`]'s `IntoResponse`.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::{Order, OrderError, OrderResult, OrderService};

pub const NO_RECENT_ORDERS: &str = "No recent orders found.";
pub const NO_ORDER: &str = "No order found.";
pub const NO_ORDERS: &str = "No orders found.";
pub const INVALID_BODY: &str = "Invalid request body.";
pub const INVALID_PARAMETERS: &str = "Invalid request parameters.";

/// Application state shared across order handlers
#[derive(Clone)]
pub struct AppState {
    pub service: OrderService,
}

/// Query parameters for the order-by-id endpoint
///
/// A missing `id` binds to 0, which no stored order carries.
#[derive(Debug, Deserialize)]
pub struct OrderIdParams {
    #[serde(default)]
    pub id: i32,
}

/// Query parameters for the business-day endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDayParams {
    /// Day to count back from; today when absent
    pub reference_date: Option<NaiveDate>,
}

/// GET /api/orders/recent
pub async fn get_recent_orders(State(state): State<AppState>) -> OrderResult<Json<Vec<Order>>> {
    let orders = state.service.recent_orders().await?;
    non_empty(orders, NO_RECENT_ORDERS)
}

/// GET /api/orders/specificOrder?id={id}
pub async fn get_order_by_id(
    State(state): State<AppState>,
    params: Result<Query<OrderIdParams>, QueryRejection>,
) -> OrderResult<Json<Vec<Order>>> {
    let Query(params) = params.map_err(reject_parameters)?;
    let orders = state.service.orders_by_id(params.id).await?;
    non_empty(orders, NO_ORDER)
}

/// POST /api/orders
///
/// Responds 201 with the stored order; `Location` points at the recent-orders listing.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Order>, JsonRejection>,
) -> OrderResult<impl IntoResponse> {
    let Json(order) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected order payload");
        OrderError::invalid_input(INVALID_BODY)
    })?;

    let created = state.service.create_order(order).await?;
    let location = format!("/api/orders/recent?id={}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// GET /api/orders/ordersBasedOnNumberOfWorkingDays/{days}?referenceDate=YYYY-MM-DD
pub async fn get_orders_after_business_days(
    State(state): State<AppState>,
    days: Result<Path<i32>, PathRejection>,
    params: Result<Query<BusinessDayParams>, QueryRejection>,
) -> OrderResult<Json<Vec<Order>>> {
    let Path(days) = days.map_err(reject_parameters)?;
    let Query(params) = params.map_err(reject_parameters)?;
    let orders = state
        .service
        .orders_after_business_days(days, params.reference_date)
        .await?;
    non_empty(orders, NO_ORDERS)
}

fn reject_parameters(rejection: impl std::fmt::Display) -> OrderError {
    tracing::debug!(error = %rejection, "Rejected request parameters");
    OrderError::invalid_input(INVALID_PARAMETERS)
}

fn non_empty(orders: Vec<Order>, message: &str) -> OrderResult<Json<Vec<Order>>> {
    if orders.is_empty() {
        Err(OrderError::not_found(message))
    } else {
        Ok(Json(orders))
    }
}
