//! Cart service: use-cases for a user's shopping cart.

use flatshop_domain::cart::{CartItem, CartItemDraft};
use flatshop_domain::error::FlatshopError;
use flatshop_domain::id::{ApartmentId, UserId};

use crate::ports::CartRepository;

/// Application service for adding, listing and removing cart items.
pub struct CartService<R> {
    repo: R,
}

impl<R: CartRepository> CartService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List the cart of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cart(&self, user_id: UserId) -> Result<Vec<CartItem>, FlatshopError> {
        self.repo.find_by_user(user_id).await
    }

    /// Add an apartment to a user's cart.
    ///
    /// The first add stores the requested quantity; adding the same pair
    /// again increments the stored quantity by exactly one.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, e.g. when the
    /// apartment does not exist.
    pub async fn add_to_cart(&self, draft: CartItemDraft) -> Result<CartItem, FlatshopError> {
        let item = self.repo.add(draft).await?;
        tracing::info!(
            cart_item_id = %item.id,
            user_id = %item.user_id,
            apartment_id = %item.apartment_id,
            "apartment added to cart"
        );
        Ok(item)
    }

    /// Remove an apartment from a user's cart. Removing a pair that is not in
    /// the cart is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn remove_from_cart(
        &self,
        user_id: UserId,
        apartment_id: ApartmentId,
    ) -> Result<(), FlatshopError> {
        if !self.repo.remove(user_id, apartment_id).await? {
            tracing::debug!(%user_id, %apartment_id, "cart item to remove was absent");
        }
        Ok(())
    }
}
