//! Registry HTTP client
//!
//! Talks to an Artifact Hub compatible API:
//! `GET {base}/api/v1/packages/{package_id}/{version}/templates`
//! returns `{"templates": [{"name": ..., "data": ...}]}` with
//! base64-encoded file contents.

use std::time::Duration;

use chartdiff_core::RawTemplateEntry;
use serde::Deserialize;
use url::Url;

use crate::error::{RegistryError, Result};

const USER_AGENT: &str = concat!("chartdiff/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response body of the templates endpoint
#[derive(Debug, Deserialize)]
struct TemplatesResponse {
    /// Absent or null when the version ships no templates
    #[serde(default)]
    templates: Option<Vec<RawTemplateEntry>>,
}

/// HTTP client for a package registry
#[derive(Debug)]
pub struct RegistryClient {
    base_url: Url,
    client: reqwest::Client,
}

impl RegistryClient {
    /// Create a client for the given registry base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| RegistryError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        // Url::join drops the last path segment of a base without a
        // trailing slash, losing path-prefixed registries
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RegistryError::NetworkError {
                message: e.to_string(),
            })?;

        Ok(Self { base_url, client })
    }

    /// The registry base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the raw template file set of one package version
    pub async fn chart_templates(
        &self,
        package_id: &str,
        version: &str,
    ) -> Result<Vec<RawTemplateEntry>> {
        let path = format!("api/v1/packages/{}/{}/templates", package_id, version);
        let url = self
            .base_url
            .join(&path)
            .map_err(|e| RegistryError::InvalidUrl {
                url: path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(%url, "fetching chart templates");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistryError::HttpError {
                status: status.as_u16(),
                message,
            });
        }

        let body: TemplatesResponse =
            response
                .json()
                .await
                .map_err(|e| RegistryError::InvalidResponse {
                    message: e.to_string(),
                })?;

        Ok(body.templates.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_a_trailing_slash() {
        let client = RegistryClient::new("https://example.com/hub").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/hub/");

        let client = RegistryClient::new("https://example.com/hub/").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/hub/");

        let client = RegistryClient::new("https://example.com").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = RegistryClient::new("not a url").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidUrl { .. }));
    }
}
