/*
[INPUT]:  TaskDraft snapshots from the task form, HecateClient
[OUTPUT]: Creation results (created / not created / failed)
[POS]:    Boundary between the task form and the task backend
[UPDATE]: When the creation contract or backend error mapping changes
*/

use anyhow::Result;
use async_trait::async_trait;
use hecate_client::{HecateClient, TaskDraft};
use tracing::{info, warn};

/// Asynchronous task creation operation injected into the task form.
///
/// Resolves `Ok(true)` when the task was created and `Ok(false)` for
/// expected business failures (the implementation reports those itself).
/// `Err` is reserved for unexpected failures; the form shows its message.
#[async_trait]
pub trait TaskCreator: Send + Sync {
    async fn create_task(&self, draft: TaskDraft) -> Result<bool>;
}

/// Creates tasks through the backend's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTaskCreator {
    client: HecateClient,
}

impl HttpTaskCreator {
    pub fn new(client: HecateClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskCreator for HttpTaskCreator {
    async fn create_task(&self, draft: TaskDraft) -> Result<bool> {
        match self.client.create_task(&draft).await {
            Ok(created) => {
                info!(task_id = %created.id, name = %created.name, "task created");
                Ok(true)
            }
            Err(err) if err.is_rejection() => {
                warn!(name = %draft.name, error = %err, "task creation rejected");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecate_client::ClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn creator_with_response(template: ResponseTemplate) -> (MockServer, HttpTaskCreator) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .respond_with(template)
            .mount(&server)
            .await;
        let client = HecateClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap();
        (server, HttpTaskCreator::new(client))
    }

    fn draft() -> TaskDraft {
        TaskDraft {
            name: "Compact".to_string(),
            description: "Compact the event log".to_string(),
            ..TaskDraft::default()
        }
    }

    #[tokio::test]
    async fn test_created_resolves_true() {
        let (_server, creator) = creator_with_response(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"id": "t-1", "name": "Compact"})),
        )
        .await;
        assert!(creator.create_task(draft()).await.unwrap());
    }

    #[tokio::test]
    async fn test_rejection_resolves_false() {
        let (_server, creator) = creator_with_response(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({"message": "invalid"})),
        )
        .await;
        assert!(!creator.create_task(draft()).await.unwrap());
    }

    #[tokio::test]
    async fn test_server_error_is_err() {
        let (_server, creator) =
            creator_with_response(ResponseTemplate::new(500).set_body_string("database down"))
                .await;
        let err = creator.create_task(draft()).await.unwrap_err();
        assert_eq!(err.to_string(), "API error (code 500): database down");
    }
}
