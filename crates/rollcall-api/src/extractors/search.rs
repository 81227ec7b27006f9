//! Search and pagination extractor for the school listing

use crate::{extractors::ExtractorError, state::AppState};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use rollcall_core::config::ListingConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Query parameters for the school listing
///
/// Pages are 1-based with no upper bound; a page past the data yields an
/// empty page. A blank search term counts as no search. Page-size default
/// and ceiling come from [`ListingConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    /// Page number (1-based)
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    /// Number of schools per page
    #[validate(range(min = 1))]
    pub limit: Option<u32>,

    /// Fuzzy search term matched against school names
    #[validate(length(max = 120))]
    pub search: Option<String>,
}

impl SearchQuery {
    /// Get the effective page number (1-based)
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Get the effective limit, defaulted and capped by configuration
    #[must_use]
    pub fn limit(&self, listing: &ListingConfig) -> u32 {
        self.limit
            .unwrap_or(listing.default_page_size)
            .clamp(1, listing.max_page_size)
    }

    /// Get the trimmed search term, treating blank input as absent
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Row offset for the current page
    ///
    /// Computed in `i64` so arbitrarily high page numbers cannot overflow.
    #[must_use]
    pub fn offset(&self, listing: &ListingConfig) -> i64 {
        (i64::from(self.page()) - 1) * i64::from(self.limit(listing))
    }

    /// Convert to SQL LIMIT/OFFSET values
    #[must_use]
    pub fn to_sql(&self, listing: &ListingConfig) -> (i64, i64) {
        (i64::from(self.limit(listing)), self.offset(listing))
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for SearchQuery {
    type Rejection = ExtractorError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        let search: Self = serde_urlencoded::from_str(query)
            .map_err(|e| ExtractorError::bad_request(format!("Invalid query parameters: {e}")))?;

        if let Err(validation_errors) = search.validate() {
            return Err(ExtractorError::bad_request(format!(
                "Invalid query parameters: {validation_errors:?}"
            )));
        }

        let max = state.config.listing.max_page_size;
        if search.limit.is_some_and(|l| l > max) {
            return Err(ExtractorError::bad_request(format!(
                "Invalid query parameters: limit must be at most {max}"
            )));
        }

        Ok(search)
    }
}
