//! # Product Routes
//!
//! ```text
//! GET    /products                        list (limit, sort by price)
//! POST   /products                        create                → 201
//!        /products/                       same as /products
//! GET    /products/categories             category → count
//! GET    /products/categories/{category}  products in category  → 404 if none
//! GET    /products/{id}                   get
//! PUT    /products/{id}                   replace
//! PATCH  /products/{id}                   merge non-zero fields
//! DELETE /products/{id}                   remove, returns the removed record
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use bazaar_core::{Categories, Product};

use super::query::ListParams;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route("/products/categories", get(list_categories))
        .route("/products/categories/{category}", get(products_in_category))
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(merge_product)
                .delete(delete_product),
        )
}

async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(params) = params?;
    Ok(Json(
        state.store.products().list(params.limit, params.sort_order()),
    ))
}

async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Product>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(product) = body?;
    let created = state.store.products().create(product)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_categories(State(state): State<AppState>) -> Json<Categories> {
    Json(state.store.products().categories())
}

async fn products_in_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Path(category) = category?;
    Ok(Json(state.store.products().by_category(&category)?))
}

async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.store.products().get(id)?))
}

async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<Product>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(product) = body?;
    Ok(Json(
        state.store.products().update(Product { id, ..product })?,
    ))
}

async fn merge_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<Product>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(partial) = body?;
    Ok(Json(
        state.store.products().merge(Product { id, ..partial })?,
    ))
}

async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.store.products().delete(id)?))
}
