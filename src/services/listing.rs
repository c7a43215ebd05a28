use std::collections::HashSet;

use serde::Serialize;

use crate::database::models::Product;
use crate::database::{ProductStore, StoreError};
use crate::filter::{PageRequest, ProductPredicate};

/// Result of a product listing request.
///
/// `brands` and `categories` are facets derived from the returned page only,
/// not from the full filtered set; clients use them as filter UI hints for
/// what is currently visible. `total_products` counts the full filtered set
/// for total-pages computation.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    #[serde(rename = "totalProducts")]
    pub total_products: u64,
}

/// Execute a listing request: paged fetch, independent full count, and
/// page-scoped facets.
///
/// The two reads are not atomic; a write landing between them may make
/// `total_products` disagree with the page contents. Acceptable for a
/// best-effort listing endpoint.
pub async fn list_products(
    store: &dyn ProductStore,
    predicate: &ProductPredicate,
    page: &PageRequest,
) -> Result<ProductListing, StoreError> {
    let products = store.find_page(predicate, page).await?;
    let total_products = store.count(predicate).await?;

    let brands = distinct(products.iter().map(|p| p.brand.as_str()));
    let categories = distinct(products.iter().map(|p| p.category.as_str()));

    Ok(ProductListing {
        products,
        brands,
        categories,
        total_products,
    })
}

/// Distinct values in first-occurrence order
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}
