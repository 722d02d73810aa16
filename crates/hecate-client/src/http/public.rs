/*
[INPUT]:  Base URL only, no credentials required
[OUTPUT]: Backend reachability
[POS]:    HTTP layer - public endpoints
[UPDATE]: When adding unauthenticated endpoints
*/

use crate::http::{HecateClient, Result};
use reqwest::Method;

impl HecateClient {
    /// Check that the backend answers
    ///
    /// GET /health
    pub async fn health(&self) -> Result<()> {
        let builder = self.request(Method::GET, "/health")?;
        self.send_checked(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, HecateClient, HecateError};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_health_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok"
            })))
            .mount(&server)
            .await;

        let client = HecateClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert!(client.health().await.is_ok());
    }

    #[tokio::test]
    async fn test_health_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = HecateClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap();
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, HecateError::Api { code: 503, .. }));
    }
}
