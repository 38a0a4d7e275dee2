//! Cart item: a per-user quantity of one apartment.

use serde::{Deserialize, Serialize};

use crate::id::{ApartmentId, CartItemId, UserId};

/// One row of a user's cart. `(apartment_id, user_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub apartment_id: ApartmentId,
    pub user_id: UserId,
    pub quantity: i32,
}

impl CartItem {
    /// Attach a storage-assigned `id` to a draft.
    #[must_use]
    pub fn from_draft(id: CartItemId, draft: CartItemDraft) -> Self {
        Self {
            id,
            apartment_id: draft.apartment_id,
            user_id: draft.user_id,
            quantity: draft.quantity,
        }
    }
}

/// Add-to-cart request.
///
/// `quantity` is only used when the pair is inserted for the first time;
/// adding an existing pair again bumps the stored quantity by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemDraft {
    pub apartment_id: ApartmentId,
    pub user_id: UserId,
    #[serde(default)]
    pub quantity: i32,
}

impl CartItemDraft {
    #[must_use]
    pub fn new(user_id: UserId, apartment_id: ApartmentId, quantity: i32) -> Self {
        Self {
            apartment_id,
            user_id,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_quantity_to_zero_when_omitted() {
        let draft: CartItemDraft =
            serde_json::from_str(r#"{"apartment_id":3,"user_id":9}"#).unwrap();
        assert_eq!(draft, CartItemDraft::new(UserId::new(9), ApartmentId::new(3), 0));
    }

    #[test]
    fn should_require_user_and_apartment() {
        let result: Result<CartItemDraft, _> = serde_json::from_str(r#"{"quantity":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_echo_draft_fields_with_assigned_id() {
        let draft = CartItemDraft::new(UserId::new(1), ApartmentId::new(2), 5);
        let item = CartItem::from_draft(CartItemId::new(10), draft);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 10, "apartment_id": 2, "user_id": 1, "quantity": 5})
        );
    }
}
