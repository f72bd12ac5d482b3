//! Order service: the four operations exposed over HTTP

use crate::core::business_days::{business_day_cutoff, cutoff_instant};
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{OrderError, OrderResult, StorageError};
use crate::core::order::Order;
use crate::core::store::{OrderQuery, OrderStore};
use crate::core::validation::validate_order;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;

/// Window used by [`OrderService::recent_orders`]
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Stateless service over an [`OrderStore`]
///
/// Empty results are returned as `Ok(vec![])`; turning them into "not found"
/// is left to the caller.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    /// Create a service using the system clock
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn OrderStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Orders entered within the last 24 hours, newest first
    pub async fn recent_orders(&self) -> OrderResult<Vec<Order>> {
        let since = self.clock.now() - Duration::hours(RECENT_WINDOW_HOURS);
        let query = OrderQuery::visible().entered_after(since).newest_first();

        self.find(&query, "fetching recent orders").await
    }

    /// Orders with the given id, newest first
    pub async fn orders_by_id(&self, id: i32) -> OrderResult<Vec<Order>> {
        let query = OrderQuery::visible().with_id(id).newest_first();

        self.find(&query, "fetching specific order").await
    }

    /// Validate and store a new order
    ///
    /// The order is stored as submitted, `entry_date` included.
    pub async fn create_order(&self, order: Order) -> OrderResult<Order> {
        validate_order(&order)?;

        let created = self
            .store
            .insert(order)
            .await
            .map_err(|e| internal(e, "submitting an order"))?;

        tracing::info!(order_id = created.id, "Order created");
        Ok(created)
    }

    /// Orders entered after the cutoff `days` business days before `reference`
    ///
    /// `reference` defaults to today on the service clock.
    pub async fn orders_after_business_days(
        &self,
        days: i32,
        reference: Option<NaiveDate>,
    ) -> OrderResult<Vec<Order>> {
        let reference = reference.unwrap_or_else(|| self.clock.today());
        let cutoff = business_day_cutoff(reference, days)?;
        tracing::debug!(days, %reference, %cutoff, "Computed business-day cutoff");

        let query = OrderQuery::visible()
            .entered_after(cutoff_instant(cutoff))
            .newest_first();

        self.find(&query, "fetching orders").await
    }

    async fn find(&self, query: &OrderQuery, context: &str) -> OrderResult<Vec<Order>> {
        self.store
            .find(query)
            .await
            .map_err(|e| internal(e, context))
    }
}

fn internal(err: StorageError, context: &str) -> OrderError {
    tracing::error!(error = %err, "Error occurred while {}", context);
    OrderError::Internal(err)
}
