use mongodb::bson::{doc, Document};

use crate::config;

/// Sort direction for the price ordering of a listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"asc"` selects ascending order; any other value (including absent)
    /// yields descending order.
    pub fn from_param(sort: Option<&str>) -> Self {
        match sort {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    /// Render as a MongoDB sort document over `price`
    pub fn to_sort_document(self) -> Document {
        match self {
            SortDirection::Asc => doc! { "price": 1 },
            SortDirection::Desc => doc! { "price": -1 },
        }
    }
}

/// Resolved paging parameters for a listing fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: i64,
    pub sort: SortDirection,
}

impl PageRequest {
    /// Resolve raw `page`/`limit`/`sort` request parameters.
    ///
    /// Defaults: page 1, limit from config (9), descending price order.
    /// Non-positive values are clamped to 1; limit is capped by the
    /// configured maximum.
    pub fn resolve(page: Option<i64>, limit: Option<i64>, sort: Option<&str>) -> Self {
        let listing = &config::config().listing;

        let page = page.unwrap_or(1).max(1);
        let mut limit = limit.unwrap_or(listing.default_limit).max(1);

        if let Some(max_limit) = listing.max_limit {
            if limit > max_limit {
                tracing::warn!("Limit {} exceeds max {}, capping to max", limit, max_limit);
                limit = max_limit;
            }
        }

        Self {
            skip: ((page - 1) as u64).saturating_mul(limit as u64),
            limit,
            sort: SortDirection::from_param(sort),
        }
    }
}
