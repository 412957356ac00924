use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canvas position of a node, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

/// The behavioral kind of a node within a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
  Start,
  End,
  Tool,
  Condition,
  Loop,
  Code,
}

/// The payload carried by a node: what it does and how it is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
  /// Behavioral kind (start, end, tool, ...).
  #[serde(rename = "type")]
  pub kind: NodeKind,
  /// Display label shown on the canvas.
  pub label: String,
  /// Backend id of the referenced tool, for `tool` nodes.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tool_id: Option<i64>,
  /// Kind-specific configuration; opaque to the graph core.
  #[serde(default)]
  pub config: HashMap<String, serde_json::Value>,
}

/// A placed unit of work in the workflow graph.
///
/// Identity is `id`; two nodes with the same id are the same logical
/// entity. The `renderer` field is the presentation layer's node type
/// and is passed through unchanged by the graph core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  #[serde(rename = "type")]
  pub renderer: String,
  pub data: NodeData,
  #[serde(default)]
  pub position: Position,
}

/// A partial update to an existing node.
///
/// `Some` fields replace the corresponding node field wholesale; `None`
/// fields leave it untouched. Nested structures are never deep-merged:
/// a `Some(data)` replaces the whole `NodeData`, config map included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePatch {
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub renderer: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<NodeData>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub position: Option<Position>,
}

impl NodePatch {
  /// A patch that changes nothing.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Apply this patch to a node, field by field.
  pub fn apply(self, node: &mut Node) {
    if let Some(renderer) = self.renderer {
      node.renderer = renderer;
    }
    if let Some(data) = self.data {
      node.data = data;
    }
    if let Some(position) = self.position {
      node.position = position;
    }
  }
}
