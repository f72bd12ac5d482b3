//! Core module containing the order model, its rules and the service built on them

pub mod business_days;
pub mod clock;
pub mod error;
pub mod order;
pub mod service;
pub mod store;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorResponse, OrderError, OrderResult, StorageError};
pub use order::Order;
pub use service::OrderService;
pub use store::{OrderQuery, OrderStore, SortOrder};
