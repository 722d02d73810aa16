/*
[INPUT]:  Task backend schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - task drafts, creation acknowledgements, cluster records
[UPDATE]: When the backend schema changes or new records are added
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ClusterStatus, TaskCategory, TaskPriority, TaskType};

/// In-progress task creation record, sent as-is to `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub auto_start: bool,
    pub requires_approval: bool,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Backend acknowledgement for a created task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(alias = "error")]
    pub message: String,
}

/// Read-only cluster record consumed by the cluster detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ClusterStatus,
    #[serde(default)]
    pub node_count: u32,
    #[serde(default)]
    pub active_tasks: u32,
    /// Health score in `0.0..=1.0`
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_draft_default() {
        let draft = TaskDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.description.is_empty());
        assert_eq!(draft.task_type, TaskType::System);
        assert_eq!(draft.priority, TaskPriority::Medium);
        assert_eq!(draft.category, TaskCategory::UserAssigned);
        assert!(!draft.auto_start);
        assert!(!draft.requires_approval);
        assert!(draft.parameters.is_empty());
        assert!(draft.dependencies.is_empty());
    }

    #[test]
    fn test_task_draft_serializes_camel_case() {
        let draft = TaskDraft {
            name: "Rotate keys".to_string(),
            description: "Rotate cluster signing keys".to_string(),
            auto_start: true,
            dependencies: vec!["task-1".to_string()],
            ..TaskDraft::default()
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["taskType"], "system");
        assert_eq!(value["category"], "user_assigned");
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["autoStart"], true);
        assert_eq!(value["requiresApproval"], false);
        assert_eq!(value["dependencies"][0], "task-1");
        assert!(value["parameters"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_cluster_data_defaults_optional_fields() {
        let cluster: ClusterData =
            serde_json::from_str(r#"{"id": "c-1", "name": "alpha"}"#).unwrap();
        assert_eq!(cluster.status, ClusterStatus::Idle);
        assert_eq!(cluster.node_count, 0);
        assert!(cluster.last_activity.is_none());
        assert!(cluster.tags.is_empty());
    }

    #[test]
    fn test_api_error_body_accepts_error_alias() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": "duplicate name"}"#).unwrap();
        assert_eq!(body.message, "duplicate name");
    }
}
