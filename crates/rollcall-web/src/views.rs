//! View models and templates for the schools page

use crate::api_client::{SchoolListResponse, SchoolSummary};
use crate::paths;
use askama::Template;
use rollcall_core::SchoolTag;

/// Tag badge on a school row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Badge text
    pub label: String,
    /// CSS class selecting the badge color
    pub css_class: String,
}

impl Badge {
    fn from_raw(raw: &str) -> Self {
        let tag = SchoolTag::parse(raw);
        Self {
            label: tag.label().to_string(),
            css_class: tag.css_class().to_string(),
        }
    }
}

/// One table row on the schools page
#[derive(Debug, Clone)]
pub struct SchoolRowView {
    /// School name
    pub name: String,
    /// "City, State"
    pub location: String,
    /// Number of registered students
    pub student_count: i64,
    /// Tag badges
    pub badges: Vec<Badge>,
    /// Edit form link
    pub edit_href: String,
    /// Chapter creation link, only for schools without a chapter
    pub create_chapter_href: Option<String>,
}

impl From<SchoolSummary> for SchoolRowView {
    fn from(school: SchoolSummary) -> Self {
        let create_chapter_href = match school.chapter_id {
            Some(_) => None,
            None => Some(paths::chapter_new(school.id)),
        };

        Self {
            location: format!("{}, {}", school.city, school.state),
            badges: school.tags.iter().map(|t| Badge::from_raw(t)).collect(),
            edit_href: paths::school_edit(school.id),
            create_chapter_href,
            name: school.name,
            student_count: school.student_count,
        }
    }
}

/// Pagination links under the table
#[derive(Debug, Clone)]
pub struct PaginationView {
    /// Current page (1-based)
    pub page: u32,
    /// Total page count (at least 1)
    pub total_pages: u32,
    /// Link to the previous page, if any
    pub prev_href: Option<String>,
    /// Link to the next page, if any
    pub next_href: Option<String>,
}

impl PaginationView {
    /// Build pagination state from the current query and total count
    #[must_use]
    pub fn new(page: u32, limit: u32, search: Option<&str>, total: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total_pages = ((total.max(0) as u64).div_ceil(u64::from(limit.max(1))) as u32).max(1);

        let prev_href = (page > 1).then(|| paths::schools_page(page - 1, limit, search));
        let next_href = (page < total_pages).then(|| paths::schools_page(page + 1, limit, search));

        Self {
            page,
            total_pages,
            prev_href,
            next_href,
        }
    }
}

/// Schools page template
#[derive(Debug, Template)]
#[template(path = "schools.html")]
pub struct SchoolsPageTemplate {
    /// Current search box contents
    pub search: String,
    /// Table rows
    pub rows: Vec<SchoolRowView>,
    /// Total matching schools
    pub total_schools: i64,
    /// Pagination state
    pub pagination: PaginationView,
    /// Link to the school creation form
    pub new_school_href: String,
}

impl SchoolsPageTemplate {
    /// Build the page view model from an API response
    #[must_use]
    pub fn from_response(
        response: SchoolListResponse,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Self {
        Self {
            search: search.unwrap_or_default().to_string(),
            rows: response.schools.into_iter().map(SchoolRowView::from).collect(),
            total_schools: response.total_schools,
            pagination: PaginationView::new(page, limit, search, response.total_schools),
            new_school_href: paths::school_new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn school(name: &str, tags: &[&str], chapter: Option<Uuid>, students: i64) -> SchoolSummary {
        SchoolSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            city: "Atlanta".to_string(),
            state: "GA".to_string(),
            chapter_id: chapter,
            student_count: students,
        }
    }

    #[test]
    fn test_row_location_format() {
        let row = SchoolRowView::from(school("Alpha University", &[], None, 42));
        assert_eq!(row.location, "Atlanta, GA");
    }

    #[test]
    fn test_chapter_link_only_without_chapter() {
        let without = SchoolRowView::from(school("Alpha University", &[], None, 42));
        assert!(without.create_chapter_href.is_some());

        let with = SchoolRowView::from(school("Beta College", &[], Some(Uuid::new_v4()), 12));
        assert!(with.create_chapter_href.is_none());
    }

    #[test]
    fn test_badge_classes() {
        let row = SchoolRowView::from(school("Alpha", &["hbcu", "hsi", "rural"], None, 1));

        assert_eq!(row.badges[0].css_class, "badge-hbcu");
        assert_eq!(row.badges[0].label, "HBCU");
        assert_eq!(row.badges[1].css_class, "badge-hsi");
        assert_eq!(row.badges[2].css_class, "badge-default");
        assert_eq!(row.badges[2].label, "rural");
    }

    #[test]
    fn test_pagination_first_page() {
        let view = PaginationView::new(1, 20, None, 45);
        assert_eq!(view.total_pages, 3);
        assert!(view.prev_href.is_none());
        assert_eq!(
            view.next_href.as_deref(),
            Some("/admin/schools?page=2&limit=20")
        );
    }

    #[test]
    fn test_pagination_last_page() {
        let view = PaginationView::new(3, 20, None, 45);
        assert!(view.next_href.is_none());
        assert_eq!(
            view.prev_href.as_deref(),
            Some("/admin/schools?page=2&limit=20")
        );
    }

    #[test]
    fn test_pagination_keeps_search() {
        let view = PaginationView::new(1, 20, Some("alpha"), 45);
        assert_eq!(
            view.next_href.as_deref(),
            Some("/admin/schools?page=2&limit=20&search=alpha")
        );
    }

    #[test]
    fn test_pagination_empty_results() {
        let view = PaginationView::new(1, 20, None, 0);
        assert_eq!(view.total_pages, 1);
        assert!(view.prev_href.is_none());
        assert!(view.next_href.is_none());
    }

    #[test]
    fn test_template_renders_rows_and_badges() {
        let response = SchoolListResponse {
            schools: vec![
                school("Alpha University", &["hbcu"], None, 42),
                school("Beta College", &[], Some(Uuid::new_v4()), 12),
            ],
            total_schools: 2,
        };

        let page = SchoolsPageTemplate::from_response(response, 1, 20, None);
        let html = page.render().expect("render template");

        assert!(html.contains("Alpha University"));
        assert!(html.contains("badge-hbcu"));
        assert!(html.contains("Edit"));
        // Beta has a chapter, so only Alpha gets a create-chapter link
        assert_eq!(html.matches("Create chapter").count(), 1);
    }

    #[test]
    fn test_template_renders_search_state() {
        let response = SchoolListResponse {
            schools: vec![],
            total_schools: 0,
        };

        let page = SchoolsPageTemplate::from_response(response, 1, 20, Some("alpha"));
        let html = page.render().expect("render template");

        assert!(html.contains(r#"value="alpha""#));
        assert!(html.contains("No schools found"));
    }
}
