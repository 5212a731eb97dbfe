use crate::error::{ApiError, ErrorResponse};
use crate::extract::{RecordId, ValidJson};
use crate::models::{Item, ItemCreate, ItemUpdate, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

type ItemsState = State<AppState<Item>>;

const ENTITY: &str = "Item";

/// GET / handler - Service banner
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service banner", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Items API"))
}

/// GET /items handler - List all items in creation order
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = [Item])
    ),
    tag = "items"
)]
pub async fn list_items(State(state): ItemsState) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list_all().await;
    tracing::info!("Listed {} items", items.len());
    (StatusCode::OK, Json(items))
}

/// GET /items/{id} handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid id", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): ItemsState,
    id: RecordId,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = id.stored().ok_or(ApiError::NotFound(ENTITY))?;

    match state.store.get(id).await {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::NotFound(ENTITY))
        }
    }
}

/// POST /items handler - Create an item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemCreate,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): ItemsState,
    ValidJson(payload): ValidJson<ItemCreate>,
) -> (StatusCode, Json<Item>) {
    let item = state.store.create(payload).await;
    tracing::info!(
        "Created item with id: {} ({} stored)",
        item.id,
        state.store.len().await
    );
    (StatusCode::CREATED, Json(item))
}

/// PUT /items/{id} handler - Partially update an item
///
/// Only fields present and non-null in the body are changed.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ItemUpdate,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid id or fields", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_item(
    State(state): ItemsState,
    id: RecordId,
    ValidJson(update): ValidJson<ItemUpdate>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = id.stored().ok_or(ApiError::NotFound(ENTITY))?;

    let item = state
        .store
        .update(id, update)
        .await
        .ok_or(ApiError::NotFound(ENTITY))?;

    tracing::info!("Updated item with id: {}", id);
    Ok((StatusCode::OK, Json(item)))
}

/// DELETE /items/{id} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid id", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(state): ItemsState,
    id: RecordId,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = id.stored().ok_or(ApiError::NotFound(ENTITY))?;

    let item = state
        .store
        .delete(id)
        .await
        .ok_or(ApiError::NotFound(ENTITY))?;

    tracing::info!("Deleted item with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(format!(
            "Item '{}' deleted successfully",
            item.name
        ))),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::items_router;
    use crate::error::ErrorKind;
    use axum::{body::Body, http::Request, Router};
    use serde_json::{json, Value as JsonValue};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        items_router(AppState::new())
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<JsonValue>,
    ) -> (StatusCode, JsonValue) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = setup_test_app();

        let (status, body) = send(&app, "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        let message: MessageResponse = serde_json::from_value(body).unwrap();
        assert!(message.message.contains("Items API"));
    }

    #[tokio::test]
    async fn test_create_get_delete_round_trip() {
        let app = setup_test_app();

        let (status, created) = send(
            &app,
            "POST",
            "/items",
            Some(json!({"name": "Widget", "price": 9.99})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["name"], "Widget");
        assert!(created["description"].is_null());
        assert_eq!(created["price"], 9.99);
        assert!(chrono::DateTime::parse_from_rfc3339(created["created_at"].as_str().unwrap()).is_ok());

        let (status, fetched) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, deleted) = send(&app, "DELETE", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["message"], "Item 'Widget' deleted successfully");

        let (status, missing) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_value(missing).unwrap();
        assert_eq!(error.error, "Item not found");
        assert_eq!(error.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_preserves_order_and_skips_deleted() {
        let app = setup_test_app();

        for name in ["a", "b", "c"] {
            send(&app, "POST", "/items", Some(json!({"name": name, "price": 1.0}))).await;
        }
        send(&app, "DELETE", "/items/2", None).await;
        let (_, created) = send(&app, "POST", "/items", Some(json!({"name": "d", "price": 1.0}))).await;
        assert_eq!(created["id"], 4);

        let (status, body) = send(&app, "GET", "/items", None).await;
        assert_eq!(status, StatusCode::OK);

        let items: Vec<Item> = serde_json::from_value(body).unwrap();
        let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_update_only_price() {
        let app = setup_test_app();

        send(
            &app,
            "POST",
            "/items",
            Some(json!({"name": "Widget", "description": "blue", "price": 9.99})),
        )
        .await;

        let (status, updated) = send(&app, "PUT", "/items/1", Some(json!({"price": 19.5}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Widget");
        assert_eq!(updated["description"], "blue");
        assert_eq!(updated["price"], 19.5);
    }

    #[tokio::test]
    async fn test_empty_update_returns_unchanged_item() {
        let app = setup_test_app();

        let (_, created) = send(&app, "POST", "/items", Some(json!({"name": "Widget", "price": 2.0}))).await;
        let (status, updated) = send(&app, "PUT", "/items/1", Some(json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_missing_item_is_not_found() {
        let app = setup_test_app();

        let (status, _) = send(&app, "GET", "/items/9999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "PUT", "/items/9999", Some(json!({"price": 1.0}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/items/9999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_with_missing_price_is_rejected() {
        let app = setup_test_app();

        let (status, body) = send(&app, "POST", "/items", Some(json!({"name": "Widget"}))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidInput);

        let (_, list) = send(&app, "GET", "/items", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_create_with_wrong_type_is_rejected() {
        let app = setup_test_app();

        let (status, _) = send(
            &app,
            "POST",
            "/items",
            Some(json!({"name": "Widget", "price": "cheap"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, "POST", "/items", Some(json!({"name": "", "price": 1.0}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_item_untouched() {
        let app = setup_test_app();

        let (_, created) = send(&app, "POST", "/items", Some(json!({"name": "Widget", "price": 2.0}))).await;

        let (status, _) = send(
            &app,
            "PUT",
            "/items/1",
            Some(json!({"name": "Gadget", "price": "free"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, fetched) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let app = setup_test_app();

        let (status, body) = send(&app, "GET", "/items/abc", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_negative_id_is_not_found() {
        let app = setup_test_app();
        send(&app, "POST", "/items", Some(json!({"name": "Widget", "price": 1.0}))).await;

        for (method, uri, body) in [
            ("GET", "/items/-1", None),
            ("PUT", "/items/-1", Some(json!({"price": 1.0}))),
            ("DELETE", "/items/-5", None),
            ("GET", "/items/0", None),
        ] {
            let (status, body) = send(&app, method, uri, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} {} should be 404", method, uri);
            let error: ErrorResponse = serde_json::from_value(body).unwrap();
            assert_eq!(error.error, "Item not found");
            assert_eq!(error.kind, ErrorKind::NotFound);
        }

        let (status, _) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
