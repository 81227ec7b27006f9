//! Page handlers for serving HTML templates

use crate::{state::AppState, views::SchoolsPageTemplate};
use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

/// Query parameters accepted by the schools page
#[derive(Debug, Default, Deserialize)]
pub struct SchoolsPageQuery {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Schools per page
    pub limit: Option<u32>,
    /// Fuzzy search term
    pub search: Option<String>,
}

/// Schools browser page
///
/// Fetches one page of schools from the API and renders the table,
/// search box, and pagination.
pub async fn schools_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SchoolsPageQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let response = state
        .api_client
        .list_schools(page, limit, search)
        .await
        .map_err(|e| {
            error!("Failed to fetch schools from API: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                "Failed to load schools".to_string(),
            )
        })?;

    let template = SchoolsPageTemplate::from_response(response, page, limit, search);

    template.render().map(Html).map_err(|e| {
        error!("Failed to render schools page: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to render page".to_string(),
        )
    })
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_query_defaults() {
        let query = SchoolsPageQuery::default();
        assert_eq!(query.page.unwrap_or(1).max(1), 1);
        assert_eq!(query.limit.unwrap_or(20).clamp(1, 100), 20);
    }

    #[test]
    fn test_limit_clamped() {
        let query = SchoolsPageQuery {
            page: Some(0),
            limit: Some(500),
            search: None,
        };
        assert_eq!(query.page.unwrap_or(1).max(1), 1);
        assert_eq!(query.limit.unwrap_or(20).clamp(1, 100), 100);
    }
}
