use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use crate::database::models::{NewProduct, Product};
use crate::error::ApiError;
use crate::filter::{PageRequest, ProductPredicate};
use crate::middleware::AuthUser;
use crate::services::listing::{self, ProductListing};
use crate::AppState;

/// Query parameters for the listing endpoint.
///
/// Non-numeric `page`/`limit` values fail query deserialization and reject
/// the request with 400; non-positive values are clamped during resolution.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub title: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /add-products - create a product.
///
/// Reached only through the authenticate/authorize pipeline; by the time
/// this runs the caller is a verified seller.
pub async fn add_product(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.products.insert(Product::new(input)).await?;
    tracing::info!(seller = %auth_user.email, product_id = %product.id, "Product added");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /all-products - filtered, paginated, price-sorted listing
pub async fn all_products(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ProductListing>, ApiError> {
    let predicate = ProductPredicate::new(query.title, query.category, query.brand);
    let page = PageRequest::resolve(query.page, query.limit, query.sort.as_deref());

    let result = listing::list_products(state.products.as_ref(), &predicate, &page).await?;
    Ok(Json(result))
}
