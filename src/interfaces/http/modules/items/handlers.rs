//! Item catalog HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::CatalogService;
use crate::interfaces::http::common::{status_for, ApiResponse};

use super::dto::{ItemDto, ListItemsParams};

/// Catalog handler state
#[derive(Clone)]
pub struct ItemsState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/items",
    tag = "Items",
    params(ListItemsParams),
    responses(
        (status = 200, description = "Items matching the filters", body = ApiResponse<Vec<ItemDto>>)
    )
)]
pub async fn list_items(
    State(state): State<ItemsState>,
    Query(params): Query<ListItemsParams>,
) -> Result<Json<ApiResponse<Vec<ItemDto>>>, (StatusCode, Json<ApiResponse<Vec<ItemDto>>>)> {
    let query = params.into_query();
    let items = state.catalog.list_items(&query).await.map_err(|e| {
        (status_for(&e), Json(ApiResponse::error(e.to_string())))
    })?;

    let dtos: Vec<ItemDto> = items.into_iter().map(ItemDto::from_domain).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{item_id}",
    tag = "Items",
    params(("item_id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = ApiResponse<ItemDto>),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<ItemsState>,
    Path(item_id): Path<String>,
) -> Result<Json<ApiResponse<ItemDto>>, (StatusCode, Json<ApiResponse<ItemDto>>)> {
    let item = state.catalog.get_item(&item_id).await.map_err(|e| {
        (status_for(&e), Json(ApiResponse::error(e.to_string())))
    })?;

    let Some(item) = item else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Item '{}' not found", item_id))),
        ));
    };

    Ok(Json(ApiResponse::success(ItemDto::from_domain(item))))
}
