use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{AppJson, AppPath, ErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{
    AddedResponse, CreateItem, Item, ItemListResponse, ItemResponse, MessageResponse, PriceInput,
    UpdateItem, UpdatedResponse,
};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(
        Item,
        PriceInput,
        CreateItem,
        UpdateItem,
        ItemListResponse,
        AddedResponse,
        ItemResponse,
        UpdatedResponse,
        MessageResponse,
        ErrorResponse
    )),
    tags(
        (name = "Items", description = "Catalog item endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{name}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List every item
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = ItemListResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ItemListResponse>> {
    let items = service.list_items().await?;
    Ok(Json(ItemListResponse { items }))
}

/// Add a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = AddedResponse),
        (status = 400, description = "Missing field or non-numeric price", body = ErrorResponse),
        (status = 404, description = "An item with this name already exists", body = ErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    AppJson(input): AppJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let added = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

/// Get an item by name
#[utoipa::path(
    get,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, description = "Name is not valid UTF-8", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    AppPath(name): AppPath<String>,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(&name).await?;
    Ok(Json(ItemResponse { item }))
}

/// Change an item's name and/or price
#[utoipa::path(
    patch,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = UpdatedResponse),
        (status = 400, description = "Nothing to update or non-numeric price", body = ErrorResponse),
        (status = 404, description = "Item not found or new name already taken", body = ErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    AppPath(name): AppPath<String>,
    AppJson(input): AppJson<UpdateItem>,
) -> ItemResult<Json<UpdatedResponse>> {
    let updated = service.update_item(&name, input).await?;
    Ok(Json(UpdatedResponse { updated }))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{name}",
    tag = "Items",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 400, description = "Name is not valid UTF-8", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    AppPath(name): AppPath<String>,
) -> ItemResult<Json<MessageResponse>> {
    service.delete_item(&name).await?;
    Ok(Json(MessageResponse::deleted()))
}
