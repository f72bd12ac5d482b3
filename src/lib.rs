//! # Orders API
//!
//! A small REST service for recording orders and reading them back.
//!
//! ## Features
//!
//! - **Recent orders**: everything entered in the last 24 hours, newest first
//! - **Lookup by id**: orders matching an id, newest first
//! - **Validated creation**: name and description must be non-blank and at most 100 characters
//! - **Business-day windows**: orders entered after a cutoff N business days back,
//!   skipping weekends, New Year's Day and Christmas Day
//! - **Soft delete**: orders flagged `isDeleted` never appear in any result
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryOrderStore::new())
//!         .serve("127.0.0.1:5000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Clock, ErrorResponse, FixedClock, Order, OrderError, OrderQuery, OrderResult,
        OrderService, OrderStore, SortOrder, StorageError, SystemClock,
        business_days::{business_day_cutoff, cutoff_instant, is_business_day, is_holiday},
        validation::validate_order,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;

    // === Config ===
    pub use crate::config::{LoggingConfig, ServerConfig, ServiceConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
