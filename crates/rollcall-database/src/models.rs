//! Database row models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A school row as returned by the listing query
///
/// One row per school. `chapter_id` comes from the left-joined chapters
/// table and is null for schools without a chapter. `student_count` is
/// computed per row by a correlated subquery.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SchoolRowDb {
    /// School ID
    pub id: Uuid,
    /// School name
    pub name: String,
    /// Raw classification tags
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

/// A session row joined with its owning user
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SessionUserDb {
    /// User ID
    pub user_id: Uuid,
    /// User email
    pub email: String,
    /// Role name as stored in the database
    pub role: String,
    /// Whether the user account is active
    pub active: bool,
    /// Session expiry
    pub expires_at: DateTime<Utc>,
}

impl SessionUserDb {
    /// Whether the session is still usable
    #[must_use]
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.active && self.expires_at > now
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn sample_session(active: bool, expires_in: Duration) -> SessionUserDb {
        SessionUserDb {
            user_id: Uuid::new_v4(),
            email: "amb@example.edu".to_string(),
            role: "ambassador".to_string(),
            active,
            expires_at: Utc::now() + expires_in,
        }
    }

    #[test]
    fn test_session_valid() {
        let session = sample_session(true, Duration::hours(1));
        assert!(session.is_valid(Utc::now()));
    }

    #[test]
    fn test_session_expired() {
        let session = sample_session(true, Duration::hours(-1));
        assert!(!session.is_valid(Utc::now()));
    }

    #[test]
    fn test_session_inactive_user() {
        let session = sample_session(false, Duration::hours(1));
        assert!(!session.is_valid(Utc::now()));
    }

    #[test]
    fn test_school_row_serialization() {
        let row = SchoolRowDb {
            id: Uuid::new_v4(),
            name: "Alpha University".to_string(),
            tags: vec!["hbcu".to_string()],
            city: "Atlanta".to_string(),
            state: "GA".to_string(),
            chapter_id: None,
            student_count: 42,
        };

        let json = serde_json::to_value(&row).expect("serialize row");
        assert_eq!(json["name"], "Alpha University");
        assert_eq!(json["student_count"], 42);
        assert!(json["chapter_id"].is_null());
    }
}
