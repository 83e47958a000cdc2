//! # Order Item Handlers
//!
//! `/api/order-items` and `/api/order-items/{id}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use shop_core::{EntityId, OrderItem};

/// Order item as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: EntityId,
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemDto {
    fn from(i: OrderItem) -> Self {
        OrderItemDto {
            id: i.id,
            order_id: i.order_id,
            product_id: i.product_id,
            quantity: i.quantity,
        }
    }
}

/// Body for create and full replacement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: i32,
}

/// Query string for `GET /api/order-items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrderItemsQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub order_id: Option<EntityId>,
}

/// `?orderId=` with no value means no filter.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

/// `GET /api/order-items[?orderId=]`
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListOrderItemsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<OrderItemDto>>> {
    let Query(query) = query?;

    let items = match query.order_id {
        Some(order_id) => state.db.order_items().list_by_order_id(order_id).await?,
        None => state.db.order_items().list_all().await?,
    };

    Ok(Json(items.into_iter().map(OrderItemDto::from).collect()))
}

/// `GET /api/order-items/{id}`
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<OrderItemDto>> {
    let Path(id) = path?;
    debug!(id = %id, "get order item");

    let item = state
        .db
        .order_items()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order item", id))?;

    Ok(Json(item.into()))
}

/// `POST /api/order-items`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<OrderItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<OrderItemDto>)> {
    let Json(req) = body?;

    let item = state
        .db
        .order_items()
        .create(req.order_id, req.product_id, req.quantity)
        .await?;
    info!(id = %item.id, order_id = %item.order_id, "Order item created");

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// `PUT /api/order-items/{id}`
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
    body: Result<Json<OrderItemRequest>, JsonRejection>,
) -> ApiResult<Json<OrderItemDto>> {
    let Path(id) = path?;
    let Json(req) = body?;

    let items = state.db.order_items();
    if items.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Order item", id));
    }

    let item = items
        .update(id, req.order_id, req.product_id, req.quantity)
        .await?;
    info!(id = %id, "Order item updated");

    Ok(Json(item.into()))
}

/// `DELETE /api/order-items/{id}`
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<u64>> {
    let Path(id) = path?;

    let items = state.db.order_items();
    if items.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Order item", id));
    }

    let removed = items.delete(id).await?;
    info!(id = %id, removed = removed, "Order item deleted");

    Ok(Json(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    fn parse(uri: &'static str) -> Option<EntityId> {
        let uri = Uri::from_static(uri);
        let Query(query) = Query::<ListOrderItemsQuery>::try_from_uri(&uri).unwrap();
        query.order_id
    }

    #[test]
    fn test_order_id_filter() {
        assert_eq!(parse("/api/order-items?orderId=7"), Some(7));
        assert_eq!(parse("/api/order-items"), None);
        assert_eq!(parse("/api/order-items?orderId="), None);
    }

    #[test]
    fn test_order_id_filter_rejects_garbage() {
        let uri = Uri::from_static("/api/order-items?orderId=first");
        assert!(Query::<ListOrderItemsQuery>::try_from_uri(&uri).is_err());
    }
}
