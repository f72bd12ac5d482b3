//! Store boundary for orders
//!
//! Backends implement [`OrderStore`]; every read goes through an
//! [`OrderQuery`], which carries the filter predicate and the sort key.

use crate::core::error::StorageError;
use crate::core::order::Order;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Ordering applied to query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Storage order
    #[default]
    Insertion,
    /// Most recent `entry_date` first; ties keep storage order
    EntryDateDesc,
}

/// Filter and sort criteria for reading orders
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub id: Option<i32>,
    /// Exclusive lower bound on `entry_date`
    pub entered_after: Option<DateTime<Utc>>,
    pub sort: SortOrder,
}

impl OrderQuery {
    /// All orders that are not soft-deleted
    pub fn visible() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn entered_after(mut self, instant: DateTime<Utc>) -> Self {
        self.entered_after = Some(instant);
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.sort = SortOrder::EntryDateDesc;
        self
    }

    /// Whether `order` satisfies the filter part of this query
    pub fn matches(&self, order: &Order) -> bool {
        order.is_visible()
            && self.id.is_none_or(|id| order.id == id)
            && self
                .entered_after
                .is_none_or(|after| order.entry_date > after)
    }

    /// Sort `orders` in place; the sort is stable
    pub fn apply_sort(&self, orders: &mut [Order]) {
        if self.sort == SortOrder::EntryDateDesc {
            orders.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
        }
    }
}

/// Persistence seam for orders
///
/// Implementations serialize their own reads and writes. A failed insert must
/// leave the store unchanged.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert an order, returning it as stored (with its assigned id)
    async fn insert(&self, order: Order) -> Result<Order, StorageError>;

    /// Return every order matching `query`, sorted as requested
    async fn find(&self, query: &OrderQuery) -> Result<Vec<Order>, StorageError>;
}
