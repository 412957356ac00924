use serde::{Deserialize, Serialize};

/// A directed connection between two nodes.
///
/// An edge is meaningful only while both endpoints exist as nodes in the
/// current graph; the graph core removes incident edges together with
/// their node. Handle fields identify which port on each node the edge
/// attaches to and are opaque to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
  pub id: String,
  pub source: String,
  pub target: String,
  #[serde(rename = "sourceHandle", skip_serializing_if = "Option::is_none")]
  pub source_handle: Option<String>,
  #[serde(rename = "targetHandle", skip_serializing_if = "Option::is_none")]
  pub target_handle: Option<String>,
}

impl Edge {
  /// Create an edge with no handle metadata.
  pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
      source_handle: None,
      target_handle: None,
    }
  }

  /// Whether this edge touches the given node id as source or target.
  pub fn touches(&self, node_id: &str) -> bool {
    self.source == node_id || self.target == node_id
  }
}
