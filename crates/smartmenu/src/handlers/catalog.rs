//! Catalog read handlers.
//!
//! Each handler decodes the raw JSON body (whatever the `Content-Type`),
//! validates it, runs one repository operation and maps the outcome:
//! data -> 200 with the data, no rows -> [`ApiError::NoRows`], failure ->
//! [`ApiError::Repository`].

use axum::{body::Bytes, extract::State, Json};
use serde::de::DeserializeOwned;

use smartmenu_core::menu::{
    BranchMenuRequest, CategoriesRequest, Category, MenuItem, MenuItemsRequest,
    SingleMenuItemRequest, Validate,
};
use smartmenu_core::storage::QueryOutcome;

use crate::{handlers::ApiError, state::AppState};

pub const NO_ENTITY_FOUND: &str = "no entity found";
pub const NO_MENU_ITEM_FOUND: &str = "no entity found - invalid menu-item id";
pub const NO_BRANCH_FOUND: &str = "no entity found - invalid branch id";

/// Decode and validate a request body.
fn decode_request<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_slice(body)?;
    request.validate()?;
    Ok(request)
}

/// Turn a store outcome into response data, or the no-rows error.
fn found_or<T>(outcome: QueryOutcome<T>, message: &'static str) -> Result<Json<T>, ApiError> {
    outcome.found().map(Json).ok_or(ApiError::NoRows(message))
}

/// List the categories of a branch (POST /api/categories).
pub async fn list_categories(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Category>>, ApiError> {
    let request: CategoriesRequest = decode_request(&body)?;

    let outcome = state
        .catalog
        .list_categories(&request.country_code, &request.branch_id)
        .await?;

    found_or(outcome, NO_ENTITY_FOUND)
}

/// List the menu items of one category (POST /api/menu/items).
pub async fn list_menu_items(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let request: MenuItemsRequest = decode_request(&body)?;

    let outcome = state
        .catalog
        .list_menu_items_by_category(
            &request.country_code,
            &request.branch_id,
            &request.category_id,
        )
        .await?;

    found_or(outcome, NO_ENTITY_FOUND)
}

/// Get a single menu item by primary key (POST /api/menu/item).
pub async fn get_menu_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MenuItem>, ApiError> {
    let request: SingleMenuItemRequest = decode_request(&body)?;

    let outcome = state
        .catalog
        .get_menu_item(&request.pk, &request.sk)
        .await?;

    found_or(outcome, NO_MENU_ITEM_FOUND)
}

/// List every item stored under a branch id (POST /api/branch/menu).
pub async fn list_branch_menu(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let request: BranchMenuRequest = decode_request(&body)?;

    let outcome = state
        .catalog
        .list_all_menu_items_for_branch(&request.branch_id)
        .await?;

    found_or(outcome, NO_BRANCH_FOUND)
}
