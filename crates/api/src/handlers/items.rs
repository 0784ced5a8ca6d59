//! Item CRUD handlers.
//!
//! Each handler is a thin extractor layer over an `*_impl` function taking
//! the store explicitly, so the request flow can be exercised without a router.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use tokio_stream::StreamExt;

use todo_core::item::{decode_create, decode_update, validate_id, Item, ItemList};
use todo_core::storage::{
    to_item, to_row, ConcurrencyToken, StoreError, TableStore, PARTITION_KEY,
};

use crate::{handlers::ApiError, state::AppState};

/// Response headers carrying the row's concurrency token, if it has one.
fn etag_headers(token: Option<&ConcurrencyToken>) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let value = HeaderValue::from_str(token.as_str())
            .map_err(|e| ApiError::Internal(format!("Invalid ETag {token}: {e}")))?;
        headers.insert(header::ETAG, value);
    }
    Ok(headers)
}

/// Expected token from the `If-Match` request header.
fn if_match(headers: &HeaderMap) -> Result<Option<ConcurrencyToken>, ApiError> {
    let Some(value) = headers.get(header::IF_MATCH) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| ApiError::InvalidPrecondition)?
        .trim();
    if value.is_empty() {
        return Err(ApiError::InvalidPrecondition);
    }

    Ok(Some(ConcurrencyToken::new(value)))
}

// ============================================================================
// Create Item
// ============================================================================

/// Create a new item (POST /todo).
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, HeaderMap, Json<Item>), ApiError> {
    create_item_impl(state.store.as_ref(), &body).await
}

async fn create_item_impl(
    store: &dyn TableStore,
    body: &[u8],
) -> Result<(StatusCode, HeaderMap, Json<Item>), ApiError> {
    let request = decode_create(body)?;
    let item = request.into_item();
    tracing::debug!(item_id = %item.id, "Received create item request");

    let token = store.insert(&to_row(&item)).await.map_err(|e| match e {
        // Ids are freshly generated, so a collision is a server fault.
        StoreError::AlreadyExists { .. } => ApiError::Internal(e.to_string()),
        other => other.into(),
    })?;

    tracing::info!(item_id = %item.id, "Created item");

    Ok((StatusCode::CREATED, etag_headers(Some(&token))?, Json(item)))
}

// ============================================================================
// Get Item
// ============================================================================

/// Get a single item by ID (GET /todo/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(HeaderMap, Json<Item>), ApiError> {
    get_item_impl(state.store.as_ref(), &id).await
}

async fn get_item_impl(
    store: &dyn TableStore,
    id: &str,
) -> Result<(HeaderMap, Json<Item>), ApiError> {
    let id = validate_id(id)?;

    let row = store
        .get_by_key(PARTITION_KEY, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

    let headers = etag_headers(row.etag.as_ref())?;
    Ok((headers, Json(to_item(row))))
}

// ============================================================================
// Update Item
// ============================================================================

/// Replace an item by ID (PUT /todo/{id}).
///
/// With an `If-Match` header the replace only succeeds if the stored row is
/// still at that version. Without one the write is unconditional.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let expected = if_match(&headers)?;
    update_item_impl(state.store.as_ref(), &id, expected, &body).await
}

async fn update_item_impl(
    store: &dyn TableStore,
    id: &str,
    expected: Option<ConcurrencyToken>,
    body: &[u8],
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let item = decode_update(id, body)?.into_item();
    let expected = expected.unwrap_or_else(ConcurrencyToken::any);
    tracing::debug!(item_id = %item.id, expected = %expected, "Received update item request");

    let token = store
        .replace(&to_row(&item), &expected)
        .await
        .map_err(|e| match e {
            StoreError::NotFound { .. } => ApiError::NotFound(item.id.clone()),
            StoreError::ConcurrencyConflict { .. } => ApiError::PreconditionFailed(item.id.clone()),
            other => other.into(),
        })?;

    tracing::info!(item_id = %item.id, completed = item.completed, "Updated item");

    Ok((StatusCode::NO_CONTENT, etag_headers(Some(&token))?))
}

// ============================================================================
// List Items
// ============================================================================

/// List all items (GET /todo). Order is whatever the scan yields.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<ItemList>, ApiError> {
    list_items_impl(state.store.as_ref()).await
}

async fn list_items_impl(store: &dyn TableStore) -> Result<Json<ItemList>, ApiError> {
    let mut rows = store.scan_all(PARTITION_KEY);
    let mut items = Vec::new();

    while let Some(row) = rows.next().await {
        items.push(to_item(row?));
    }

    tracing::debug!(count = items.len(), "Listed items");

    Ok(Json(ItemList { items }))
}

// ============================================================================
// Delete Item
// ============================================================================

/// Delete an item by ID (DELETE /todo/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete_item_impl(state.store.as_ref(), &id).await
}

async fn delete_item_impl(store: &dyn TableStore, id: &str) -> Result<StatusCode, ApiError> {
    let id = validate_id(id)?;
    tracing::debug!(item_id = %id, "Received delete item request");

    let row = store
        .get_by_key(PARTITION_KEY, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

    // Delete exactly the row observed above; if it changed or vanished in
    // between, it is treated as already gone.
    store.delete(&row).await.map_err(|e| match e {
        StoreError::NotFound { .. } | StoreError::ConcurrencyConflict { .. } => {
            ApiError::NotFound(id.to_string())
        }
        other => other.into(),
    })?;

    tracing::info!(item_id = %id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}
