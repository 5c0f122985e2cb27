//! Pagination extractor
//!
//! Extracts offset-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_SIZE: i64 = 20;
/// Maximum page size
const MAX_SIZE: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Zero-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Page size
    #[serde(default)]
    pub size: Option<i64>,
}

/// Validated pagination parameters.
///
/// `page` defaults to 0, `size` defaults to 20 and is capped at 100.
/// A zero or negative `size` is rejected rather than coerced.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_SIZE as u32,
        }
    }
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let page = match params.page {
            None => 0,
            Some(p) if p < 0 => {
                return Err(ApiError::invalid_query("'page' must not be negative"))
            }
            Some(p) => u32::try_from(p)
                .map_err(|_| ApiError::invalid_query("'page' is out of range"))?,
        };

        let size = match params.size {
            None => DEFAULT_SIZE,
            Some(s) if s <= 0 => return Err(ApiError::InvalidPageSize),
            Some(s) => s.min(MAX_SIZE),
        };

        Ok(Pagination {
            page,
            // min() keeps this within u32 range
            size: size as u32,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
