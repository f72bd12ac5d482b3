//! In-memory implementation of OrderStore for testing and development

use crate::core::error::StorageError;
use crate::core::order::Order;
use crate::core::store::{OrderQuery, OrderStore};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory order table
///
/// Rows are kept in insertion order. Clones share the same table.
/// Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders, deleted ones included
    pub fn len(&self) -> Result<usize, StorageError> {
        let orders = self.orders.read().map_err(|e| StorageError::LockPoisoned {
            message: format!("read lock: {}", e),
        })?;

        Ok(orders.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, mut order: Order) -> Result<Order, StorageError> {
        let mut orders = self.orders.write().map_err(|e| StorageError::LockPoisoned {
            message: format!("write lock: {}", e),
        })?;

        if order.id == 0 {
            let highest = orders.iter().map(|o| o.id).max().unwrap_or(0).max(0);
            order.id = highest.checked_add(1).ok_or(StorageError::IdsExhausted)?;
        } else if orders.iter().any(|o| o.id == order.id) {
            return Err(StorageError::DuplicateKey { id: order.id });
        }

        orders.push(order.clone());

        Ok(order)
    }

    async fn find(&self, query: &OrderQuery) -> Result<Vec<Order>, StorageError> {
        let orders = self.orders.read().map_err(|e| StorageError::LockPoisoned {
            message: format!("read lock: {}", e),
        })?;

        let mut matched: Vec<Order> = orders
            .iter()
            .filter(|order| query.matches(order))
            .cloned()
            .collect();
        query.apply_sort(&mut matched);

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let store = InMemoryOrderStore::new();

        let first = store.insert(Order::new("a", "b", Utc::now())).await.unwrap();
        let second = store.insert(Order::new("c", "d", Utc::now())).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_keeps_explicit_id() {
        let store = InMemoryOrderStore::new();

        let stored = store
            .insert(Order::new("a", "b", Utc::now()).with_id(40))
            .await
            .unwrap();
        assert_eq!(stored.id, 40);

        let next = store.insert(Order::new("c", "d", Utc::now())).await.unwrap();
        assert_eq!(next.id, 41);
    }

    #[tokio::test]
    async fn test_id_assignment_after_max_id_fails_cleanly() {
        let store = InMemoryOrderStore::new();
        store
            .insert(Order::new("last", "b", Utc::now()).with_id(i32::MAX))
            .await
            .unwrap();

        let err = store
            .insert(Order::new("next", "d", Utc::now()))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::IdsExhausted));
        assert_eq!(store.len().unwrap(), 1);

        // The lock is not poisoned: explicit ids and reads still work.
        let stored = store
            .insert(Order::new("explicit", "e", Utc::now()).with_id(7))
            .await
            .unwrap();
        assert_eq!(stored.id, 7);
        assert_eq!(store.find(&OrderQuery::visible()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_negative_ids_do_not_yield_zero() {
        let store = InMemoryOrderStore::new();
        store
            .insert(Order::new("a", "b", Utc::now()).with_id(-1))
            .await
            .unwrap();

        let assigned = store.insert(Order::new("c", "d", Utc::now())).await.unwrap();
        assert_eq!(assigned.id, 1);
    }

    #[tokio::test]
    async fn test_default_query_keeps_insertion_order() {
        let store = InMemoryOrderStore::new();
        let now = Utc::now();
        for (name, age) in [("middle", 2), ("newest", 1), ("oldest", 3)] {
            store
                .insert(Order::new(name, "x", now - Duration::hours(age)))
                .await
                .unwrap();
        }

        let found = store.find(&OrderQuery::visible()).await.unwrap();

        let names: Vec<&str> = found.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["middle", "newest", "oldest"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected_without_change() {
        let store = InMemoryOrderStore::new();
        store
            .insert(Order::new("a", "b", Utc::now()).with_id(5))
            .await
            .unwrap();

        let err = store
            .insert(Order::new("other", "other", Utc::now()).with_id(5))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::DuplicateKey { id: 5 }));
        assert_eq!(store.len().unwrap(), 1);
        let stored = store.find(&OrderQuery::visible()).await.unwrap();
        assert_eq!(stored[0].name, "a");
    }

    #[tokio::test]
    async fn test_find_filters_and_sorts() {
        let store = InMemoryOrderStore::new();
        let now = Utc::now();

        store
            .insert(Order::new("old", "x", now - Duration::days(3)))
            .await
            .unwrap();
        store
            .insert(Order::new("deleted", "x", now).soft_delete())
            .await
            .unwrap();
        store
            .insert(Order::new("mid", "x", now - Duration::hours(2)))
            .await
            .unwrap();
        store
            .insert(Order::new("new", "x", now - Duration::hours(1)))
            .await
            .unwrap();

        let found = store
            .find(
                &OrderQuery::visible()
                    .entered_after(now - Duration::days(1))
                    .newest_first(),
            )
            .await
            .unwrap();

        let names: Vec<&str> = found.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["new", "mid"]);
    }

    #[tokio::test]
    async fn test_clones_share_table() {
        let store = InMemoryOrderStore::new();
        let clone = store.clone();

        clone.insert(Order::new("a", "b", Utc::now())).await.unwrap();

        assert!(!store.is_empty().unwrap());
    }
}
