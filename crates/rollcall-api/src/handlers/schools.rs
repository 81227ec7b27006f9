//! School listing and action endpoints

use crate::{
    extractors::{CurrentUser, search::SearchQuery},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::Json};
use rollcall_core::Role;
use rollcall_database::SchoolFilter;
use rollcall_database::models::SchoolRowDb;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Minimum role tier for the schools dashboard
const REQUIRED_ROLE: Role = Role::Ambassador;

/// One school row in the listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolSummary {
    /// School ID
    pub id: Uuid,
    /// School name
    pub name: String,
    /// Classification tags
    pub tags: Vec<String>,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// Chapter ID, if the school has one
    pub chapter_id: Option<Uuid>,
    /// Number of students registered at this school
    pub student_count: i64,
}

impl From<SchoolRowDb> for SchoolSummary {
    fn from(row: SchoolRowDb) -> Self {
        Self {
            id: row.id,
            name: row.name,
            tags: row.tags,
            city: row.city,
            state: row.state,
            chapter_id: row.chapter_id,
            student_count: row.student_count,
        }
    }
}

/// Response for the school listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolListResponse {
    /// One page of schools
    pub schools: Vec<SchoolSummary>,

    /// Total number of schools matching the filter
    #[serde(rename = "totalSchools")]
    pub total_schools: i64,
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

/// List schools with fuzzy search and pagination
///
/// The page of rows and the matching total are fetched concurrently
/// with the same filter. Requires at least the ambassador role; the
/// role check happens before any data access.
///
/// # Errors
///
/// * `FORBIDDEN` - Caller is below the ambassador tier
/// * `BAD_REQUEST` - Invalid query parameters (extractor rejection)
/// * `INTERNAL_SERVER_ERROR` - Database query failures
///
/// # Example
///
/// ```text
/// GET /api/schools?search=alpha&page=2&limit=20
/// ```
pub async fn list_schools(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    query: SearchQuery,
) -> Result<Json<SchoolListResponse>, (StatusCode, Json<ErrorResponse>)> {
    if !user.role.meets(REQUIRED_ROLE) {
        warn!(
            "User {} with role {} denied access to school listing",
            user.id, user.role
        );
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: format!("Requires at least the {REQUIRED_ROLE} role"),
                code: "FORBIDDEN".to_string(),
            }),
        ));
    }

    let (limit, offset) = query.to_sql(&state.config.listing);
    let filter = SchoolFilter {
        search: query.search_term(),
        limit,
        offset,
    };

    info!(
        "Listing schools: page={}, limit={}, search={:?}",
        query.page(),
        limit,
        filter.search
    );

    let (rows, total_schools) = tokio::try_join!(
        rollcall_database::list_schools_filtered(&state.pool, &filter),
        rollcall_database::count_schools_filtered(&state.pool, &filter),
    )
    .map_err(|e| {
        error!("Failed to list schools: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to retrieve schools".to_string(),
                code: "DATABASE_ERROR".to_string(),
            }),
        )
    })?;

    let schools = rows.into_iter().map(SchoolSummary::from).collect();

    Ok(Json(SchoolListResponse {
        schools,
        total_schools,
    }))
}

/// Form action endpoint for the schools page
///
/// The page has no server-side form mutations; posting here succeeds
/// with an empty object for any authenticated user.
pub async fn school_action(CurrentUser(user): CurrentUser) -> Json<serde_json::Value> {
    info!("School page action posted by user {}", user.id);
    Json(serde_json::json!({}))
}
