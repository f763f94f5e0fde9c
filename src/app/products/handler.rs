//! HTTP handlers for the product resource.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::core::error::ApiError;

use super::{
    model::{CreateProduct, ListQuery, Product, ProductPage, SearchQuery, UpdateProduct},
    service::SharedStore,
};

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 2;

pub async fn welcome() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}

/// `GET /api/products` — optional case-insensitive category filter plus
/// slice pagination. `total` counts the filtered set before pagination.
/// An empty `category` value applies no filter.
pub async fn list_products(
    State(store): State<SharedStore>,
    query: Option<Query<ListQuery>>,
) -> Json<ProductPage> {
    let query = lenient_query(query);
    let page = parse_or(query.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_or(query.limit.as_deref(), DEFAULT_LIMIT);
    let category = query.category.as_deref().filter(|c| !c.is_empty());

    let store = store.lock().unwrap();
    let (total, products) = store.page(category, page, limit);

    Json(ProductPage {
        total,
        page,
        limit,
        products,
    })
}

/// `GET /api/products/search?name=` — substring search over the whole
/// collection, no pagination. An absent or empty `name` is a 400.
pub async fn search_products(
    State(store): State<SharedStore>,
    query: Option<Query<SearchQuery>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let needle = lenient_query(query)
        .name
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::Validation("Please provide a name to search"))?;

    let store = store.lock().unwrap();
    Ok(Json(store.search(&needle)))
}

/// `GET /api/products/stats` — record count per category, keys as stored.
pub async fn product_stats(State(store): State<SharedStore>) -> Json<BTreeMap<String, usize>> {
    let store = store.lock().unwrap();
    Json(store.stats())
}

/// `GET /api/products/:id`
pub async fn get_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let store = store.lock().unwrap();
    store.get(&id).cloned().map(Json).ok_or(ApiError::NotFound)
}

/// `POST /api/products` — all fields required; `inStock` is checked for
/// presence only, so `false` is accepted.
pub async fn create_product(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let payload: CreateProduct = lenient_json(&body);
    let new = payload
        .into_valid()
        .ok_or(ApiError::Validation("All fields are required"))?;

    let mut store = store.lock().unwrap();
    let product = store.insert(new);

    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/:id` — partial update; absent fields keep their
/// current values, the id never changes.
pub async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let changes: UpdateProduct = lenient_json(&body);

    let mut store = store.lock().unwrap();
    store
        .update(&id, changes)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `DELETE /api/products/:id` — removes the record, preserving the order
/// of the rest. Deleting an already-deleted id is a 404, not a fault.
pub async fn delete_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = store.lock().unwrap();
    store
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::NotFound)
}

/// `page`/`limit` values that fail to parse fall back to the defaults.
fn parse_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Missing, empty or malformed bodies behave like a body with every field
/// absent, so validation produces the documented 400 / keep-existing
/// behavior instead of a framework rejection.
fn lenient_json<T: serde::de::DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Query strings the extractor cannot deserialize (duplicate keys, for
/// one) behave like an empty query string, mirroring `lenient_json`.
fn lenient_query<T: Default>(query: Option<Query<T>>) -> T {
    query.map(|Query(q)| q).unwrap_or_default()
}
