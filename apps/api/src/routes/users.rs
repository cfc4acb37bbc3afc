//! # User Routes
//!
//! ```text
//! GET    /users          list (limit, sort by id)
//! GET    /users?username= the matching user as a one-element list, or 404
//! POST   /users          create   → 201
//!        /users/         same as /users
//! GET    /users/{id}     get
//! PUT    /users/{id}     replace
//! PATCH  /users/{id}     merge, including nested address fields
//! DELETE /users/{id}     remove
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use bazaar_core::User;

use super::query::UserListParams;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(merge_user)
                .delete(delete_user),
        )
}

async fn list_users(
    State(state): State<AppState>,
    params: Result<Query<UserListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let Query(params) = params?;
    let users = state.store.users();

    match params.username.as_deref() {
        Some(username) => Ok(Json(vec![users.by_username(username)?])),
        None => Ok(Json(users.list(params.limit, params.sort_order()))),
    }
}

async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<User>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(user) = body?;
    let created = state.store.users().create(user)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    Ok(Json(state.store.users().get(id)?))
}

async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<User>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    let Json(user) = body?;
    Ok(Json(state.store.users().update(User { id, ..user })?))
}

async fn merge_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<User>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    let Json(partial) = body?;
    Ok(Json(state.store.users().merge(User { id, ..partial })?))
}

async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    Ok(Json(state.store.users().delete(id)?))
}
