//! URL builders for dashboard pages

use uuid::Uuid;

/// Schools listing page
pub const SCHOOLS_PAGE: &str = "/admin/schools";

/// URL for the schools page with pagination and search state
#[must_use]
pub fn schools_page(page: u32, limit: u32, search: Option<&str>) -> String {
    let mut url = format!("{SCHOOLS_PAGE}?page={page}&limit={limit}");
    if let Some(term) = search {
        url.push_str("&search=");
        url.push_str(&urlencoding::encode(term));
    }
    url
}

/// School creation form
#[must_use]
pub fn school_new() -> String {
    format!("{SCHOOLS_PAGE}/new")
}

/// Edit form for a school
#[must_use]
pub fn school_edit(school_id: Uuid) -> String {
    format!("{SCHOOLS_PAGE}/{school_id}/edit")
}

/// Chapter creation form, pre-filled for a school
#[must_use]
pub fn chapter_new(school_id: Uuid) -> String {
    format!("/admin/chapters/new?school={school_id}")
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schools_page_without_search() {
        assert_eq!(schools_page(2, 20, None), "/admin/schools?page=2&limit=20");
    }

    #[test]
    fn test_schools_page_encodes_search() {
        assert_eq!(
            schools_page(1, 20, Some("alpha state")),
            "/admin/schools?page=1&limit=20&search=alpha%20state"
        );
    }

    #[test]
    fn test_school_edit_substitution() {
        let id = Uuid::nil();
        assert_eq!(
            school_edit(id),
            "/admin/schools/00000000-0000-0000-0000-000000000000/edit"
        );
    }

    #[test]
    fn test_chapter_new_carries_school() {
        let id = Uuid::nil();
        assert_eq!(
            chapter_new(id),
            "/admin/chapters/new?school=00000000-0000-0000-0000-000000000000"
        );
    }
}
