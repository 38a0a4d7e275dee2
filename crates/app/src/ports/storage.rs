//! Storage port: repository traits for persistence.
//!
//! Every method maps to exactly one statement against the store. Mutations
//! keyed by id report whether a row matched instead of failing on a miss.

use std::future::Future;

use flatshop_domain::apartment::{Apartment, ApartmentDraft, ApartmentPatch};
use flatshop_domain::cart::{CartItem, CartItemDraft};
use flatshop_domain::error::FlatshopError;
use flatshop_domain::id::{ApartmentId, UserId};

/// Repository for persisting and querying [`Apartment`]s.
pub trait ApartmentRepository {
    /// Insert a new apartment; storage assigns the id.
    fn create(
        &self,
        draft: ApartmentDraft,
    ) -> impl Future<Output = Result<Apartment, FlatshopError>> + Send;

    /// Get an apartment by its unique identifier.
    fn get_by_id(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<Option<Apartment>, FlatshopError>> + Send;

    /// Get all apartments, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Apartment>, FlatshopError>> + Send;

    /// Overwrite the fields carried by `patch`. Returns `false` when no row
    /// has this id.
    fn update(
        &self,
        id: ApartmentId,
        patch: ApartmentPatch,
    ) -> impl Future<Output = Result<bool, FlatshopError>> + Send;

    /// Flip the favourite flag in place. Returns `false` when no row has
    /// this id.
    fn toggle_favourite(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<bool, FlatshopError>> + Send;

    /// Delete an apartment. Returns `false` when no row has this id.
    fn delete(&self, id: ApartmentId) -> impl Future<Output = Result<bool, FlatshopError>> + Send;
}

/// Repository for persisting and querying [`CartItem`]s.
pub trait CartRepository {
    /// Insert the `(apartment, user)` pair, or bump its quantity by one if it
    /// already exists. The returned item carries the row id and echoes the
    /// draft.
    fn add(
        &self,
        draft: CartItemDraft,
    ) -> impl Future<Output = Result<CartItem, FlatshopError>> + Send;

    /// Get every cart item of a user, ordered by id.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<CartItem>, FlatshopError>> + Send;

    /// Remove the `(apartment, user)` pair. Returns `false` when it was not
    /// in the cart.
    fn remove(
        &self,
        user_id: UserId,
        apartment_id: ApartmentId,
    ) -> impl Future<Output = Result<bool, FlatshopError>> + Send;
}
