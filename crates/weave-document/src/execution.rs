use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a remote workflow execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
  Running,
  Completed,
  Failed,
}

/// Request to execute a stored workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRequest {
  pub workflow_id: i64,
  #[serde(default)]
  pub input_data: HashMap<String, serde_json::Value>,
}

/// One log line emitted during execution.
///
/// The backend attaches extra per-node fields with no declared schema;
/// they are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
  pub level: String,
  pub message: String,
  #[serde(flatten)]
  pub extra: HashMap<String, serde_json::Value>,
}

/// An execution record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
  pub id: i64,
  pub workflow_id: i64,
  pub status: ExecutionStatus,
  #[serde(default)]
  pub output_data: Option<serde_json::Value>,
  #[serde(default)]
  pub logs: Vec<LogEntry>,
  pub started_at: DateTime<Utc>,
  pub completed_at: Option<DateTime<Utc>>,
}
