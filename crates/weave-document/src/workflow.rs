use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::node::Node;

/// Placeholder name for workflows that have not been named yet.
pub const UNTITLED_NAME: &str = "Untitled workflow";

/// Workflow-level metadata, distinct from the graph structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInfo {
  pub name: String,
  pub description: String,
  pub variables: HashMap<String, serde_json::Value>,
}

impl Default for WorkflowInfo {
  fn default() -> Self {
    Self {
      name: UNTITLED_NAME.to_string(),
      description: String::new(),
      variables: HashMap::new(),
    }
  }
}

/// The serialized form of a workflow exchanged with the backend.
///
/// Every field has a serde default so partial documents deserialize:
/// absent `nodes`/`edges` become empty collections and an absent
/// `variables` becomes an empty mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowDocument {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub nodes: Vec<Node>,
  #[serde(default)]
  pub edges: Vec<Edge>,
  #[serde(default)]
  pub variables: HashMap<String, serde_json::Value>,
}

/// A workflow as stored by the backend, with its record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
  pub id: i64,
  #[serde(flatten)]
  pub document: WorkflowDocument,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
