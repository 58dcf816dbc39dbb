//! Creation entry point for orders arriving as untrusted maps.

use serde_json::Value;

use packhouse_core::{DomainError, DomainResult};

use crate::order::Order;

/// Validates incoming order data and constructs an [`Order`].
///
/// This is the single creation path for untrusted input: an order built here
/// always starts in `new` status.
pub struct OrderValidator;

impl OrderValidator {
    /// Validate an untrusted key-value structure and build an order from it.
    ///
    /// Requires an object with an `items` key holding a non-empty array.
    /// `id` defaults to `0` when absent (the persistence collaborator
    /// assigns real ids).
    pub fn validate(order_data: &Value) -> DomainResult<Order> {
        let map = order_data
            .as_object()
            .ok_or_else(|| DomainError::validation("order_data must be an object"))?;

        let items = map
            .get("items")
            .and_then(Value::as_array)
            .filter(|items| !items.is_empty())
            .ok_or_else(|| DomainError::validation("items must be a non-empty list"))?;

        let id = match map.get("id") {
            None => 0,
            Some(v) => v
                .as_i64()
                .ok_or_else(|| DomainError::validation("id must be an integer"))?,
        };

        Order::new(id, items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;
    use packhouse_core::Entity;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn valid_data_produces_new_order() {
        let data = json!({"id": 5, "items": [{"sku": "A"}, {"sku": "B"}]});
        let order = OrderValidator::validate(&data).unwrap();
        assert_eq!(*order.id(), 5);
        assert_eq!(order.status(), OrderStatus::New);
        assert_eq!(order.items(), data["items"].as_array().unwrap().as_slice());
    }

    #[test]
    fn id_defaults_to_zero_when_absent() {
        let data = json!({"items": ["anything"]});
        let order = OrderValidator::validate(&data).unwrap();
        assert_eq!(*order.id(), 0);
    }

    #[test]
    fn missing_items_are_rejected() {
        let err = OrderValidator::validate(&json!({"id": 1})).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_items_are_rejected() {
        let err = OrderValidator::validate(&json!({"id": 1, "items": []})).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_object_input_is_rejected() {
        let err = OrderValidator::validate(&json!(["items"])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_integer_id_is_rejected() {
        let err = OrderValidator::validate(&json!({"id": "x", "items": [1]})).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_id_is_rejected() {
        let err = OrderValidator::validate(&json!({"id": -2, "items": [1]})).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    proptest! {
        /// Property: any object with a non-negative id and a non-empty items
        /// array validates into a new-status order carrying those items.
        #[test]
        fn well_formed_data_always_validates(
            id in 0i64..1_000_000,
            items in prop::collection::vec(0u32..100, 1..12),
        ) {
            let expected_len = items.len();
            let data = json!({"id": id, "items": items});
            let order = OrderValidator::validate(&data).unwrap();
            prop_assert_eq!(*order.id(), id);
            prop_assert_eq!(order.status(), OrderStatus::New);
            prop_assert_eq!(order.items().len(), expected_len);
        }
    }
}
