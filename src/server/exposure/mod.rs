//! API exposure modules
//!
//! Each exposure type consumes an `OrderService` and produces a Router for its protocol.

pub mod rest;

pub use rest::RestExposure;
