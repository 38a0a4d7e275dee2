//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use flatshop_app::ports::{ApartmentRepository, CartRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the apartment and cart routes at the root plus `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<AR, CR>(state: AppState<AR, CR>) -> Router
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
