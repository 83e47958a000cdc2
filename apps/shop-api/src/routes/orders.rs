//! # Order Handlers
//!
//! `/api/orders` and `/api/orders/{id}`.
//!
//! ## Ownership
//! ```text
//! POST /api/orders  { "username": "mallory" }   (caller: alice)
//!      │
//!      ▼
//! body.username ignored ──► orders.create("alice")
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::auth::Caller;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use shop_core::{EntityId, Order};

/// Order as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: EntityId,
    pub username: String,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        OrderDto {
            id: o.id,
            username: o.username,
        }
    }
}

/// Body for create and replace.
///
/// On create the username is always taken from the caller; on replace it
/// is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Query string for `GET /api/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListOrdersQuery {
    pub username: Option<String>,
}

/// `GET /api/orders[?username=]`
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListOrdersQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<OrderDto>>> {
    let Query(query) = query?;

    let orders = match query.username {
        Some(username) => state.db.orders().list_by_username(&username).await?,
        None => state.db.orders().list_all().await?,
    };

    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// `GET /api/orders/{id}`
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<OrderDto>> {
    let Path(id) = path?;
    debug!(id = %id, "get order");

    let order = state
        .db
        .orders()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", id))?;

    Ok(Json(order.into()))
}

/// `POST /api/orders`
pub async fn create(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<OrderDto>)> {
    let Json(req) = body?;

    if let Some(requested) = req.username.as_deref() {
        if requested != caller.username {
            warn!(
                caller = %caller.username,
                requested = %requested,
                "Ignoring username in order body"
            );
        }
    }

    let order = state.db.orders().create(&caller.username).await?;
    info!(id = %order.id, username = %order.username, "Order created");

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// `PUT /api/orders/{id}`
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> ApiResult<Json<OrderDto>> {
    let Path(id) = path?;
    let Json(req) = body?;

    let orders = state.db.orders();
    if orders.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Order", id));
    }

    let username = req
        .username
        .ok_or_else(|| ApiError::bad_request("username is required"))?;

    let order = orders.update(id, &username).await?;
    info!(id = %id, "Order updated");

    Ok(Json(order.into()))
}

/// `DELETE /api/orders/{id}`
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<u64>> {
    let Path(id) = path?;

    let orders = state.db.orders();
    if orders.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Order", id));
    }

    let removed = orders.delete(id).await?;
    info!(id = %id, removed = removed, "Order deleted");

    Ok(Json(removed))
}
