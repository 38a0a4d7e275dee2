//! Shared application state for axum handlers.

use std::sync::Arc;

use flatshop_app::ports::{ApartmentRepository, CartRepository};
use flatshop_app::services::apartment_service::ApartmentService;
use flatshop_app::services::cart_service::CartService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<AR, CR> {
    /// Apartment listings service.
    pub apartment_service: Arc<ApartmentService<AR>>,
    /// Cart service.
    pub cart_service: Arc<CartService<CR>>,
}

impl<AR, CR> Clone for AppState<AR, CR> {
    fn clone(&self) -> Self {
        Self {
            apartment_service: Arc::clone(&self.apartment_service),
            cart_service: Arc::clone(&self.cart_service),
        }
    }
}

impl<AR, CR> AppState<AR, CR>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(apartment_service: ApartmentService<AR>, cart_service: CartService<CR>) -> Self {
        Self {
            apartment_service: Arc::new(apartment_service),
            cart_service: Arc::new(cart_service),
        }
    }
}
