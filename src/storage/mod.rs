//! Storage implementations for the order store

pub mod in_memory;

pub use in_memory::InMemoryOrderStore;
