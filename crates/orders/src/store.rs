//! Persistence port for orders.
//!
//! The domain layer never touches storage directly; the excluded persistence
//! collaborator implements this trait (rows, transactions, locking). The
//! in-memory implementation here exists for tests/dev.

use std::sync::Mutex;

use packhouse_core::Entity;

use crate::order::Order;

/// Port: fetch the current full order set and persist a mutated order.
pub trait OrderStore {
    type Error: core::fmt::Debug;

    /// Load every order currently known to the store.
    fn load_all(&self) -> Result<Vec<Order>, Self::Error>;

    /// Persist an order, replacing any stored order with the same id.
    fn save(&self, order: &Order) -> Result<(), Self::Error>;
}

#[derive(Debug)]
pub enum InMemoryStoreError {
    /// Access failed due to internal lock poisoning.
    Poisoned,
}

/// In-memory order store.
///
/// - No IO / no async
/// - Upsert-by-id semantics
/// - Serializes concurrent access with a plain mutex
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    type Error = InMemoryStoreError;

    fn load_all(&self) -> Result<Vec<Order>, Self::Error> {
        let orders = self.orders.lock().map_err(|_| InMemoryStoreError::Poisoned)?;
        Ok(orders.clone())
    }

    fn save(&self, order: &Order) -> Result<(), Self::Error> {
        let mut orders = self.orders.lock().map_err(|_| InMemoryStoreError::Poisoned)?;

        if let Some(existing) = orders.iter_mut().find(|o| o.id() == order.id()) {
            *existing = order.clone();
        } else {
            orders.push(order.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn order(id: i64) -> Order {
        Order::new(id, vec![json!({"sku": "A"})]).unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = InMemoryOrderStore::new();
        store.save(&order(1)).unwrap();
        store.save(&order(2)).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn save_replaces_order_with_same_id() {
        let store = InMemoryOrderStore::new();
        let mut o = order(1);
        store.save(&o).unwrap();

        o.confirm(Utc::now());
        store.save(&o).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status(), o.status());
    }
}
