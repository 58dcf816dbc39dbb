//! Warehouse orders domain module.
//!
//! This crate contains business rules for the order lifecycle
//! (new → confirmed → packaged), implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod order;
pub mod store;
pub mod validator;

pub use order::{Order, OrderStatus};
pub use store::{InMemoryOrderStore, OrderStore};
pub use validator::OrderValidator;
