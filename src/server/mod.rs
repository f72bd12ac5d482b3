//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires an order store and clock
//! into an `OrderService` and exposes it over REST.

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
