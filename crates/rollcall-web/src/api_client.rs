//! HTTP client for communicating with the rollcall API

use reqwest::Client;
use rollcall_core::{Error, Result};

// Import actual types from API handlers
pub use rollcall_api::handlers::schools::{SchoolListResponse, SchoolSummary};

/// API client for making HTTP requests to the rollcall API server
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session_token: None,
        }
    }

    /// Set the session token used for backend requests
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Fetch one page of schools from the API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn list_schools(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<SchoolListResponse> {
        let mut url = format!("{}/api/schools?page={page}&limit={limit}", self.base_url);
        if let Some(term) = search {
            url.push_str("&search=");
            url.push_str(&urlencoding::encode(term));
        }

        let mut request = self.client.get(&url);
        if let Some(ref token) = self.session_token {
            request = request.header("X-Session-Token", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to fetch schools: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "API returned error: {}",
                response.status()
            )));
        }

        response
            .json::<SchoolListResponse>()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse schools response: {e}")))
    }

    /// Post the schools page form action to the API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn post_school_action(&self) -> Result<serde_json::Value> {
        let url = format!("{}/api/schools", self.base_url);

        let mut request = self.client.post(&url);
        if let Some(ref token) = self.session_token {
            request = request.header("X-Session-Token", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to post school action: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "API returned error: {}",
                response.status()
            )));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse action response: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_builder() {
        let client = ApiClient::new("http://localhost:8080").with_session_token("tok");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.session_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "schools": [{
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "Alpha University",
                "tags": ["hbcu"],
                "city": "Atlanta",
                "state": "GA",
                "chapter_id": null,
                "student_count": 42
            }],
            "totalSchools": 1
        }"#;

        let parsed: SchoolListResponse = serde_json::from_str(json).expect("parse response");
        assert_eq!(parsed.total_schools, 1);
        assert_eq!(parsed.schools[0].name, "Alpha University");
        assert!(parsed.schools[0].chapter_id.is_none());
    }
}
