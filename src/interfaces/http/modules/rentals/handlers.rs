//! Rental HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::application::BookingService;
use crate::interfaces::http::common::{status_for, ApiResponse};

use super::dto::{parse_day_bound, CreateRentalRequest, RentalDto};

/// Rental handler state
#[derive(Clone)]
pub struct RentalsState {
    pub booking: Arc<BookingService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{item_id}/rentals",
    tag = "Rentals",
    params(("item_id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Rentals for the item, newest start date first", body = ApiResponse<Vec<RentalDto>>)
    )
)]
pub async fn list_rentals(
    State(state): State<RentalsState>,
    Path(item_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<RentalDto>>>, (StatusCode, Json<ApiResponse<Vec<RentalDto>>>)> {
    let rentals = state
        .booking
        .rentals_for_item(&item_id)
        .await
        .map_err(|e| (status_for(&e), Json(ApiResponse::error(e.to_string()))))?;

    let dtos: Vec<RentalDto> = rentals.into_iter().map(RentalDto::from_domain).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/v1/items/{item_id}/rentals",
    tag = "Rentals",
    params(("item_id" = String, Path, description = "Item ID")),
    request_body = CreateRentalRequest,
    responses(
        (status = 201, description = "Rental created", body = ApiResponse<RentalDto>),
        (status = 400, description = "Invalid dates or reversed period"),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Item already rented in the requested period"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_rental(
    State(state): State<RentalsState>,
    Path(item_id): Path<String>,
    Json(body): Json<CreateRentalRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<RentalDto>>),
    (StatusCode, Json<ApiResponse<RentalDto>>),
> {
    body.validate().map_err(|e| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let start = parse_day_bound("date_start", &body.date_start)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e))))?;
    let end = parse_day_bound("date_end", &body.date_end)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e))))?;

    let rental = state
        .booking
        .rent_item(&item_id, &body.renter_id, start, end)
        .await
        .map_err(|e| (status_for(&e), Json(ApiResponse::error(e.to_string()))))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RentalDto::from_domain(rental))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{item_id}/rentals/days",
    tag = "Rentals",
    params(("item_id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Booked days compacted into printable ranges, e.g. [\"12.08-15.08\", \"20.08\"]", body = ApiResponse<Vec<String>>)
    )
)]
pub async fn booked_days(
    State(state): State<RentalsState>,
    Path(item_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<String>>>, (StatusCode, Json<ApiResponse<Vec<String>>>)> {
    let ranges = state
        .booking
        .booked_days(&item_id)
        .await
        .map_err(|e| (status_for(&e), Json(ApiResponse::error(e.to_string()))))?;

    let rendered: Vec<String> = ranges.iter().map(ToString::to_string).collect();
    Ok(Json(ApiResponse::success(rendered)))
}
