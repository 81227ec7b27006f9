//! Database query operations for the rollcall admin services

use crate::models::{SchoolRowDb, SessionUserDb};
use rollcall_core::{Error, Result};
use sqlx::{PgPool, Row};

/// Trigram similarity floor applied to both similarity checks
pub const SIMILARITY_THRESHOLD: f32 = 0.15;

/// Fuzzy name match predicate shared by the page and count queries
///
/// Both queries must filter on exactly this expression, otherwise the
/// reported total drifts from the rows actually returned. `$1` is the
/// search term, `$2` the similarity threshold.
const SEARCH_PREDICATE: &str =
    "similarity(s.name, $1) > $2 AND word_similarity($1, s.name) > $2";

/// Filter parameters for the school listing
#[derive(Debug, Clone, Default)]
pub struct SchoolFilter<'a> {
    /// Optional fuzzy search term matched against school names
    pub search: Option<&'a str>,
    /// Page size
    pub limit: i64,
    /// Row offset
    pub offset: i64,
}

fn page_sql(with_search: bool) -> String {
    let select = "\
        SELECT s.id, s.name, s.tags, s.city, s.state, \
               c.id AS chapter_id, \
               (SELECT COUNT(*) FROM students st WHERE st.school_id = s.id) AS student_count \
        FROM schools s \
        LEFT JOIN chapters c ON c.school_id = s.id";

    if with_search {
        format!(
            "{select} WHERE {SEARCH_PREDICATE} \
             ORDER BY similarity(s.name, $1) DESC \
             LIMIT $3 OFFSET $4"
        )
    } else {
        format!("{select} ORDER BY student_count DESC LIMIT $1 OFFSET $2")
    }
}

fn count_sql(with_search: bool) -> String {
    if with_search {
        format!("SELECT COUNT(*) AS count FROM schools s WHERE {SEARCH_PREDICATE}")
    } else {
        "SELECT COUNT(*) AS count FROM schools s".to_string()
    }
}

/// School listing database operations
pub struct SchoolQueries;

impl SchoolQueries {
    /// Fetch one page of schools
    ///
    /// With a search term, rows are ordered by name similarity; without
    /// one, by student count. The two orderings never combine.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &SchoolFilter<'_>) -> Result<Vec<SchoolRowDb>> {
        tracing::debug!(
            "Listing schools: search={:?}, limit={}, offset={}",
            filter.search,
            filter.limit,
            filter.offset
        );

        let rows = if let Some(term) = filter.search {
            sqlx::query_as::<_, SchoolRowDb>(&page_sql(true))
                .bind(term)
                .bind(SIMILARITY_THRESHOLD)
                .bind(filter.limit)
                .bind(filter.offset)
                .fetch_all(pool)
                .await
        } else {
            sqlx::query_as::<_, SchoolRowDb>(&page_sql(false))
                .bind(filter.limit)
                .bind(filter.offset)
                .fetch_all(pool)
                .await
        };

        rows.map_err(|e| Error::Database(e.to_string()))
    }

    /// Count schools matching the filter
    ///
    /// Uses the same match predicate as [`Self::list`]. A count query
    /// that returns no row at all is a fatal error, not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or returns no row.
    pub async fn count(pool: &PgPool, filter: &SchoolFilter<'_>) -> Result<i64> {
        let row = if let Some(term) = filter.search {
            sqlx::query(&count_sql(true))
                .bind(term)
                .bind(SIMILARITY_THRESHOLD)
                .fetch_optional(pool)
                .await
        } else {
            sqlx::query(&count_sql(false)).fetch_optional(pool).await
        };

        let row = row
            .map_err(|e| Error::Database(e.to_string()))?
            .ok_or_else(|| Error::Database("school count query returned no row".to_string()))?;

        Ok(row.get("count"))
    }
}

/// Session database operations
pub struct SessionQueries;

impl SessionQueries {
    /// Find a session (and its user) by hashed token
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or no session
    /// matches the hash.
    pub async fn find_by_token_hash(pool: &PgPool, token_hash: &str) -> Result<SessionUserDb> {
        let query = r"
            SELECT u.id AS user_id, u.email, u.role, u.active, sess.expires_at
            FROM sessions sess
            JOIN users u ON u.id = sess.user_id
            WHERE sess.token_hash = $1
        ";

        sqlx::query_as::<_, SessionUserDb>(query)
            .bind(token_hash)
            .fetch_one(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => {
                    Error::Authentication("unknown session token".to_string())
                }
                _ => Error::Database(e.to_string()),
            })
    }
}

/// List schools with fuzzy search and pagination
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list_schools_filtered(
    pool: &PgPool,
    filter: &SchoolFilter<'_>,
) -> Result<Vec<SchoolRowDb>> {
    SchoolQueries::list(pool, filter).await
}

/// Count schools matching the filter
///
/// # Errors
///
/// Returns an error if the database query fails or returns no row.
pub async fn count_schools_filtered(pool: &PgPool, filter: &SchoolFilter<'_>) -> Result<i64> {
    SchoolQueries::count(pool, filter).await
}

/// Validate a session token hash
///
/// Returns `Ok(None)` for an unknown token so callers can distinguish
/// bad credentials from infrastructure failures.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn validate_session(pool: &PgPool, token_hash: &str) -> Result<Option<SessionUserDb>> {
    match SessionQueries::find_by_token_hash(pool, token_hash).await {
        Ok(session) => Ok(Some(session)),
        Err(Error::Authentication(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_and_count_share_predicate() {
        let page = page_sql(true);
        let count = count_sql(true);

        assert!(page.contains(SEARCH_PREDICATE));
        assert!(count.contains(SEARCH_PREDICATE));
    }

    #[test]
    fn test_predicate_requires_both_similarity_checks() {
        assert!(SEARCH_PREDICATE.contains("similarity(s.name, $1) > $2"));
        assert!(SEARCH_PREDICATE.contains("word_similarity($1, s.name) > $2"));
        assert!(SEARCH_PREDICATE.contains(" AND "));
    }

    #[test]
    fn test_orderings_are_mutually_exclusive() {
        let with_search = page_sql(true);
        assert!(with_search.contains("ORDER BY similarity(s.name, $1) DESC"));
        assert!(!with_search.contains("ORDER BY student_count"));

        let without_search = page_sql(false);
        assert!(without_search.contains("ORDER BY student_count DESC"));
        assert!(!without_search.contains("ORDER BY similarity"));
    }

    #[test]
    fn test_unfiltered_queries_have_no_predicate() {
        assert!(!page_sql(false).contains("WHERE"));
        assert!(!count_sql(false).contains("WHERE"));
    }

    #[test]
    fn test_page_sql_shape() {
        let sql = page_sql(true);
        assert!(sql.contains("LEFT JOIN chapters c ON c.school_id = s.id"));
        assert!(sql.contains("c.id AS chapter_id"));
        assert!(sql.contains(
            "(SELECT COUNT(*) FROM students st WHERE st.school_id = s.id) AS student_count"
        ));
        assert!(sql.contains("LIMIT $3 OFFSET $4"));
    }

    #[test]
    fn test_similarity_threshold() {
        assert!((SIMILARITY_THRESHOLD - 0.15).abs() < f32::EPSILON);
    }

    #[test]
    fn test_filter_default() {
        let filter = SchoolFilter::default();
        assert!(filter.search.is_none());
        assert_eq!(filter.limit, 0);
        assert_eq!(filter.offset, 0);
    }

    #[tokio::test]
    async fn test_count_missing_row_is_error_not_zero() {
        // A lazy pool never connects, so the query errors rather than
        // silently returning zero.
        let pool = sqlx::PgPool::connect_lazy("postgresql://invalid:5432/nonexistent")
            .expect("Failed to create test pool");

        let filter = SchoolFilter {
            search: Some("alpha"),
            limit: 20,
            offset: 0,
        };

        let result = SchoolQueries::count(&pool, &filter).await;
        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn test_validate_session_propagates_db_error() {
        let pool = sqlx::PgPool::connect_lazy("postgresql://invalid:5432/nonexistent")
            .expect("Failed to create test pool");

        let result = validate_session(&pool, "deadbeef").await;
        assert!(result.is_err());
    }
}
