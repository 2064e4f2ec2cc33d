// ============================================================================
// Shop API - Navigation Handlers
// File: crates/shop-api/src/handlers/navigation.rs
// ============================================================================
//! Storefront menu and owner-side navigation editing

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use shop_core::navigation::PlacementPlan;
use shop_core::services::MenuLink;

use crate::auth::AuthOwner;
use crate::dto::{AddItemRequest, EditorResponse, NavItemDto, PageDto, SaveOrderRequest};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/stores/{store_id}/menu
pub async fn menu(
    State(state): State<AppState>,
    ApiPath(store_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<MenuLink>>>, ApiError> {
    let links = state.navigation.menu(&store_id).await?;
    Ok(Json(ApiResponse::success(links)))
}

/// GET /api/v1/stores/{store_id}/navigation
pub async fn editor(
    State(state): State<AppState>,
    AuthOwner(owner_id): AuthOwner,
    ApiPath(store_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<EditorResponse>>, ApiError> {
    let editor = state.navigation.editor(&store_id, &owner_id).await?;
    Ok(Json(ApiResponse::success(EditorResponse::from(&editor))))
}

/// GET /api/v1/stores/{store_id}/navigation/available-pages
pub async fn available_pages(
    State(state): State<AppState>,
    AuthOwner(owner_id): AuthOwner,
    ApiPath(store_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<PageDto>>>, ApiError> {
    let pages = state.navigation.available_pages(&store_id, &owner_id).await?;
    Ok(Json(ApiResponse::success(pages.into_iter().map(PageDto::from).collect())))
}

/// POST /api/v1/stores/{store_id}/navigation/items
pub async fn add_item(
    State(state): State<AppState>,
    AuthOwner(owner_id): AuthOwner,
    ApiPath(store_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AddItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NavItemDto>>), ApiError> {
    let item = state
        .navigation
        .add_item(&store_id, &owner_id, &payload.page_id, payload.title.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(NavItemDto::from(&item)))))
}

/// DELETE /api/v1/stores/{store_id}/navigation/items/{item_id}
pub async fn remove_item(
    State(state): State<AppState>,
    AuthOwner(owner_id): AuthOwner,
    ApiPath((store_id, item_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.navigation.remove_item(&store_id, &owner_id, &item_id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// PUT /api/v1/stores/{store_id}/navigation/order
///
/// The body is the whole flattened list; resending it is safe.
pub async fn save_order(
    State(state): State<AppState>,
    AuthOwner(owner_id): AuthOwner,
    ApiPath(store_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<SaveOrderRequest>,
) -> Result<Json<ApiResponse<PlacementPlan>>, ApiError> {
    let plan = state
        .navigation
        .save_order(&store_id, &owner_id, &payload.items)
        .await?;
    Ok(Json(ApiResponse::success(plan)))
}
