/*
[INPUT]:  Task drafts and optional bearer credentials
[OUTPUT]: Backend acknowledgements for created tasks
[POS]:    HTTP layer - task endpoints
[UPDATE]: When adding task endpoints or changing request headers
*/

use crate::http::{HecateClient, Result};
use crate::types::{CreatedTask, TaskDraft};
use reqwest::Method;
use tracing::debug;
use uuid::Uuid;

/// Header carrying a per-request id so the backend can de-duplicate retries
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

impl HecateClient {
    /// Submit a task draft
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<CreatedTask> {
        let request_id = Uuid::new_v4().to_string();
        debug!(request_id = %request_id, name = %draft.name, "submitting task draft");

        let builder = self
            .request(Method::POST, "/api/tasks")?
            .header(REQUEST_ID_HEADER, request_id)
            .json(draft);
        self.send_json(builder).await
    }
}
