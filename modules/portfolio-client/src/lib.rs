pub mod error;
pub mod types;

pub use error::{ContentError, Result};
pub use types::{PortfolioProfile, Project, ProjectDraft, ProjectId, SocialLink};

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

/// Used when no backend URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the portfolio content backend.
///
/// Each call is a single attempt: no retries and no client-side timeout.
/// Failures come back as [`ContentError`] so callers can decide between
/// falling back and reporting a status.
#[derive(Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ContentClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| ContentError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ContentError::InvalidBaseUrl(trimmed.to_string()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// `GET /api/portfolio`
    pub async fn fetch_profile(&self) -> Result<PortfolioProfile> {
        self.get_json(&["api", "portfolio"]).await
    }

    /// `GET /api/projects`
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.get_json(&["api", "projects"]).await
    }

    /// `POST /api/admin/portfolio` with the whole profile. The response body is ignored.
    pub async fn save_profile(&self, profile: &PortfolioProfile) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "portfolio"])?;
        tracing::debug!(%url, socials = profile.socials.len(), "Saving portfolio profile");

        let resp = self.client.post(url).json(profile).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    /// `POST /api/admin/projects`. The backend assigns `id` and is authoritative
    /// for `order`, so callers re-fetch the list afterwards.
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "projects"])?;
        tracing::debug!(%url, title = draft.title.as_str(), "Creating project");

        let resp = self.client.post(url).json(draft).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    /// `DELETE /api/admin/projects/{id}`
    pub async fn delete_project(&self, id: &ProjectId) -> Result<()> {
        let url = self.endpoint(&["api", "admin", "projects", id.as_str()])?;
        tracing::debug!(%url, "Deleting project");

        let resp = self.client.delete(url).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "Fetching");

        let resp = self.client.get(url).send().await?;
        let resp = check_status(resp).await?;

        // Decode from text so a malformed body surfaces as a parse error, not a network one.
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ContentError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        let url = resp.url().clone();
        let message = resp.text().await.unwrap_or_default();
        tracing::warn!(%url, status = status.as_u16(), "Backend returned error status");
        return Err(ContentError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_segments_onto_base() {
        let client = ContentClient::new("http://localhost:8000/").unwrap();
        let url = client.endpoint(&["api", "portfolio"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/portfolio");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = ContentClient::new("https://example.com/backend").unwrap();
        let url = client.endpoint(&["api", "projects"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/backend/api/projects");
    }

    #[test]
    fn project_id_is_percent_encoded_in_path() {
        let client = ContentClient::new(DEFAULT_BASE_URL).unwrap();
        let id = ProjectId::new("a b/c");
        let url = client
            .endpoint(&["api", "admin", "projects", id.as_str()])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/admin/projects/a%20b%2Fc"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            ContentClient::new("not a url"),
            Err(ContentError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ContentClient::new("mailto:me@example.com"),
            Err(ContentError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        let client = ContentClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
