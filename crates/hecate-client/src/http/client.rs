/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{HecateError, Result};
use crate::types::ApiErrorBody;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default base URL for the Hecate task backend
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_token: String,
}

/// Main HTTP client for the Hecate task backend
#[derive(Debug, Clone)]
pub struct HecateClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl HecateClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            credentials: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build request builder for an endpoint relative to the base URL.
    /// Attaches the bearer token when credentials are set.
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint.trim_start_matches('/'))?;
        let mut builder = self.http_client.request(method, url);
        if let Some(credentials) = &self.credentials {
            builder = builder.bearer_auth(&credentials.api_token);
        }
        Ok(builder)
    }

    /// Send a request and decode a JSON body, mapping non-2xx answers to
    /// `HecateError`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send_checked(builder).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| {
            HecateError::InvalidResponse(format!("unexpected response body: {err}"))
        })
    }

    pub(crate) async fn send_checked(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(HecateError::RateLimit { retry_after });
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
            Err(_) => body.trim().to_string(),
        };
        Err(HecateError::api_error(status, message))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HecateError::Config("base_url must not be empty".to_string()));
    }
    let mut url = Url::parse(trimmed)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("https://hecate.example.com/backend").unwrap();
        assert_eq!(url.as_str(), "https://hecate.example.com/backend/");
        assert_eq!(
            url.join("api/tasks").unwrap().as_str(),
            "https://hecate.example.com/backend/api/tasks"
        );
    }

    #[test]
    fn test_empty_base_url_is_config_error() {
        assert!(matches!(parse_base_url("  "), Err(HecateError::Config(_))));
        assert!(matches!(parse_base_url("not a url"), Err(HecateError::UrlParse(_))));
    }
}
