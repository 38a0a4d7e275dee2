//! JSON REST handlers for apartment listings.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use flatshop_app::ports::{ApartmentRepository, CartRepository};
use flatshop_domain::apartment::{Apartment, ApartmentDraft, ApartmentPatch};
use flatshop_domain::id::ApartmentId;

use super::{Message, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Apartment>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and create endpoints.
pub enum ApartmentResponse {
    Ok(Json<Apartment>),
}

impl IntoResponse for ApartmentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update and favourite endpoints.
pub enum UpdateResponse {
    Ok(Json<Message>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /apartments`
pub async fn list<AR, CR>(
    State(state): State<AppState<AR, CR>>,
) -> Result<ListResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let apartments = state.apartment_service.list_apartments().await?;
    Ok(ListResponse::Ok(Json(apartments)))
}

/// `GET /apartments/:id`
pub async fn get<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    Path(id): Path<String>,
) -> Result<ApartmentResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let apartment_id: ApartmentId = parse_id("apartment", &id)?;
    let apartment = state.apartment_service.get_apartment(apartment_id).await?;
    Ok(ApartmentResponse::Ok(Json(apartment)))
}

/// `POST /apartments/create`
pub async fn create<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    payload: Result<Json<ApartmentDraft>, JsonRejection>,
) -> Result<ApartmentResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let Json(draft) = payload?;
    let created = state.apartment_service.create_apartment(draft).await?;
    Ok(ApartmentResponse::Ok(Json(created)))
}

/// `PUT /apartments/update/:id`
pub async fn update<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    Path(id): Path<String>,
    payload: Result<Json<ApartmentPatch>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let apartment_id: ApartmentId = parse_id("apartment", &id)?;
    let Json(patch) = payload?;
    state
        .apartment_service
        .update_apartment(apartment_id, patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(Message {
        message: "apartment updated",
    })))
}

/// `DELETE /apartments/delete/:id`
pub async fn delete<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let apartment_id: ApartmentId = parse_id("apartment", &id)?;
    state.apartment_service.delete_apartment(apartment_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `PUT /apartments/favourite/:id`
pub async fn toggle_favourite<AR, CR>(
    State(state): State<AppState<AR, CR>>,
    Path(id): Path<String>,
) -> Result<UpdateResponse, ApiError>
where
    AR: ApartmentRepository + Send + Sync + 'static,
    CR: CartRepository + Send + Sync + 'static,
{
    let apartment_id: ApartmentId = parse_id("apartment", &id)?;
    state.apartment_service.toggle_favourite(apartment_id).await?;
    Ok(UpdateResponse::Ok(Json(Message {
        message: "favourite status updated",
    })))
}
