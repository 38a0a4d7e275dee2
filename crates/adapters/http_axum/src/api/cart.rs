//! JSON REST handlers for user carts.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use flatshop_app::ports::{ApartmentRepository, CartRepository};
use flatshop_domain::cart::{CartItem, CartItemDraft};
use flatshop_domain::id::{ApartmentId, UserId};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CartItem>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the add endpoint.
pub enum AddResponse {
    Ok(Json<CartItem>),
}

impl IntoResponse for AddResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the remove endpoint.
pub enum RemoveResponse {
    NoContent,
}

impl IntoResponse for RemoveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /cart/:user_id`
pub async fn list<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    Path(user_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let user_id: UserId = parse_id("user", &user_id)?;
    let items = state.cart_service.list_cart(user_id).await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `POST /cart`
pub async fn add<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    payload: Result<Json<CartItemDraft>, JsonRejection>,
) -> Result<AddResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let Json(draft) = payload?;
    let item = state.cart_service.add_to_cart(draft).await?;
    Ok(AddResponse::Ok(Json(item)))
}

/// `DELETE /cart/:user_id/:apartment_id`
pub async fn remove<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    Path((user_id, apartment_id)): Path<(String, String)>,
) -> Result<RemoveResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let user_id: UserId = parse_id("user", &user_id)?;
    let apartment_id: ApartmentId = parse_id("apartment", &apartment_id)?;
    state
        .cart_service
        .remove_from_cart(user_id, apartment_id)
        .await?;
    Ok(RemoveResponse::NoContent)
}
