//! Apartment service: use-cases for managing listings.

use flatshop_domain::apartment::{Apartment, ApartmentDraft, ApartmentPatch};
use flatshop_domain::error::{FlatshopError, NotFoundError};
use flatshop_domain::id::ApartmentId;

use crate::ports::ApartmentRepository;

/// Application service for apartment CRUD and favourite toggling.
///
/// Mutations keyed by id do not check that the apartment exists: touching a
/// missing id succeeds and only leaves a debug trace.
pub struct ApartmentService<R> {
    repo: R,
}

impl<R: ApartmentRepository> ApartmentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all apartments.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_apartments(&self) -> Result<Vec<Apartment>, FlatshopError> {
        self.repo.get_all().await
    }

    /// Look up an apartment by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FlatshopError::NotFound`] when no apartment with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_apartment(&self, id: ApartmentId) -> Result<Apartment, FlatshopError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Apartment",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Insert a new apartment and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_apartment(
        &self,
        draft: ApartmentDraft,
    ) -> Result<Apartment, FlatshopError> {
        let apartment = self.repo.create(draft).await?;
        tracing::info!(apartment_id = %apartment.id, "apartment created");
        Ok(apartment)
    }

    /// Apply a partial update. An empty patch never reaches the repository.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_apartment(
        &self,
        id: ApartmentId,
        patch: ApartmentPatch,
    ) -> Result<(), FlatshopError> {
        if patch.is_empty() {
            tracing::debug!(apartment_id = %id, "empty update skipped");
            return Ok(());
        }
        if !self.repo.update(id, patch).await? {
            tracing::debug!(apartment_id = %id, "update matched no apartment");
        }
        Ok(())
    }

    /// Delete an apartment by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, for instance
    /// when cart items still reference the apartment.
    pub async fn delete_apartment(&self, id: ApartmentId) -> Result<(), FlatshopError> {
        if !self.repo.delete(id).await? {
            tracing::debug!(apartment_id = %id, "delete matched no apartment");
        }
        Ok(())
    }

    /// Flip the favourite flag of an apartment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn toggle_favourite(&self, id: ApartmentId) -> Result<(), FlatshopError> {
        if !self.repo.toggle_favourite(id).await? {
            tracing::debug!(apartment_id = %id, "favourite toggle matched no apartment");
        }
        Ok(())
    }
}
