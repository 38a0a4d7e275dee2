//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod apartments;
#[allow(clippy::missing_errors_doc)]
pub mod cart;

use std::str::FromStr;

use axum::Router;
use axum::routing::{delete, get, post, put};
use serde::Serialize;

use flatshop_app::ports::{ApartmentRepository, CartRepository};
use flatshop_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation body for mutations that return no resource.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Parse a path segment into a typed id.
fn parse_id<T: FromStr>(kind: &'static str, raw: &str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(ValidationError::InvalidId {
            kind,
            value: raw.to_string(),
        })
    })
}

/// Build the API router.
pub fn routes<AR, CR>() -> Router<AppState<AR, CR>>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    Router::new()
        // Apartments
        .route("/apartments", get(apartments::list::<AR, CR>))
        .route("/apartments/create", post(apartments::create::<AR, CR>))
        .route("/apartments/{id}", get(apartments::get::<AR, CR>))
        .route(
            "/apartments/update/{id}",
            put(apartments::update::<AR, CR>),
        )
        .route(
            "/apartments/delete/{id}",
            delete(apartments::delete::<AR, CR>),
        )
        .route(
            "/apartments/favourite/{id}",
            put(apartments::toggle_favourite::<AR, CR>),
        )
        // Cart
        .route("/cart", post(cart::add::<AR, CR>))
        .route("/cart/{user_id}", get(cart::list::<AR, CR>))
        .route(
            "/cart/{user_id}/{apartment_id}",
            delete(cart::remove::<AR, CR>),
        )
}
