use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for registering a new tool with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTool {
  pub name: String,
  pub description: String,
  pub category: String,
  #[serde(default)]
  pub config: HashMap<String, serde_json::Value>,
  pub code: String,
}

/// A tool as stored by the backend.
///
/// The `code` body is write-only: the backend accepts it on creation but
/// never returns it, so it is absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub category: String,
  #[serde(default)]
  pub config: HashMap<String, serde_json::Value>,
  pub created_at: DateTime<Utc>,
}
