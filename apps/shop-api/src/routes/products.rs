//! # Product Handlers
//!
//! `/api/products` and `/api/products/{id}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use shop_core::{EntityId, Money, Product};

/// Product as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: EntityId,
    pub name: String,
    /// Decimal amount, e.g. `9.99`
    pub price: Money,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

/// Body for create and full replacement. An `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub price: Money,
}

/// `GET /api/products`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductDto>>> {
    let products = state.db.products().list_all().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// `GET /api/products/{id}`
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<ProductDto>> {
    let Path(id) = path?;
    debug!(id = %id, "get product");

    let product = state
        .db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", id))?;

    Ok(Json(product.into()))
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProductDto>)> {
    let Json(req) = body?;

    let product = state.db.products().create(&req.name, req.price).await?;
    info!(id = %product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// `PUT /api/products/{id}`
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<Json<ProductDto>> {
    let Path(id) = path?;
    let Json(req) = body?;

    let products = state.db.products();
    if products.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Product", id));
    }

    let product = products.update(id, &req.name, req.price).await?;
    info!(id = %id, "Product updated");

    Ok(Json(product.into()))
}

/// `DELETE /api/products/{id}`
///
/// Responds with the number of rows removed.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<u64>> {
    let Path(id) = path?;

    let products = state.db.products();
    if products.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Product", id));
    }

    let removed = products.delete(id).await?;
    info!(id = %id, removed = removed, "Product deleted");

    Ok(Json(removed))
}
