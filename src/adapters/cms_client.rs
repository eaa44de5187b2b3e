use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::core::fetch::FetchError;
use crate::core::query::ResourceRequest;
use crate::core::{ConfigProvider, ContentSource};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::validate_url;

/// reqwest-backed client for the CMS REST API. One GET per call, no retry.
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl CmsClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        validate_url("cms.base_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| SiteError::InvalidConfigValueError {
            field: "cms.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.cms_base_url(), config.cms_token().map(str::to_string))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn get_json(&self, request: &ResourceRequest) -> std::result::Result<Value, FetchError> {
        let url = request.url(&self.base_url)?;
        tracing::debug!("Requesting CMS resource: {}", url);

        let mut builder = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| FetchError::Transport {
            resource: request.resource().to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        tracing::debug!("CMS response status for {}: {}", request.path(), status);

        if !status.is_success() {
            return Err(FetchError::Status {
                resource: request.resource().to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| FetchError::Decode {
            resource: request.resource().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_new_rejects_bad_base_url() {
        assert!(CmsClient::new("not a url", None).is_err());
        assert!(CmsClient::new("ftp://cms.example.com", None).is_err());
    }

    #[test]
    fn test_from_config_drops_empty_token() {
        let mut config = SiteConfig::default();
        config.cms.token = Some(String::new());
        let client = CmsClient::from_config(&config).unwrap();
        assert!(client.token.is_none());
        assert_eq!(client.base_url().as_str(), "http://localhost:1337/");
    }
}
