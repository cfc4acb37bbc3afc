//! # Cart Routes
//!
//! ```text
//! GET    /carts?startdate=&enddate=   list, optionally inside a date window
//! POST   /carts                       create, dated now        → 201
//!        /carts/                      same as /carts
//! GET    /carts/user/{user_id}        carts owned by a user
//! GET    /carts/{id}                  get
//! PUT    /carts/{id}                  replace, dated now
//! PATCH  /carts/{id}                  merge, dated now
//! DELETE /carts/{id}                  remove
//! ```
//!
//! The server owns `date`: whatever the client sends is overwritten with
//! the time of the write.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use bazaar_core::Cart;

use super::query::CartListParams;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/carts", get(list_carts).post(create_cart))
        .route("/carts/", get(list_carts).post(create_cart))
        .route("/carts/user/{user_id}", get(carts_for_user))
        .route(
            "/carts/{id}",
            get(get_cart)
                .put(update_cart)
                .patch(merge_cart)
                .delete(delete_cart),
        )
}

async fn list_carts(
    State(state): State<AppState>,
    params: Result<Query<CartListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Cart>>> {
    let Query(params) = params?;
    let range = params.date_range();
    let carts = state.store.carts();

    let found = if range.is_unbounded() {
        carts.list(params.limit, params.sort_order())
    } else {
        carts.in_date_range(range, params.limit, params.sort_order())
    };
    Ok(Json(found))
}

async fn create_cart(
    State(state): State<AppState>,
    body: Result<Json<Cart>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Cart>)> {
    let Json(cart) = body?;
    let created = state.store.carts().create(Cart {
        date: Utc::now(),
        ..cart
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn carts_for_user(
    State(state): State<AppState>,
    user_id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Vec<Cart>>> {
    let Path(user_id) = user_id?;
    Ok(Json(state.store.carts().by_user(user_id)))
}

async fn get_cart(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Cart>> {
    let Path(id) = id?;
    Ok(Json(state.store.carts().get(id)?))
}

async fn update_cart(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<Cart>, JsonRejection>,
) -> ApiResult<Json<Cart>> {
    let Path(id) = id?;
    let Json(cart) = body?;
    Ok(Json(state.store.carts().update(Cart {
        id,
        date: Utc::now(),
        ..cart
    })?))
}

async fn merge_cart(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<Cart>, JsonRejection>,
) -> ApiResult<Json<Cart>> {
    let Path(id) = id?;
    let Json(partial) = body?;
    Ok(Json(state.store.carts().merge(Cart {
        id,
        date: Utc::now(),
        ..partial
    })?))
}

async fn delete_cart(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Cart>> {
    let Path(id) = id?;
    Ok(Json(state.store.carts().delete(id)?))
}
