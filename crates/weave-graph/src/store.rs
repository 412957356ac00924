use weave_document::{Edge, Node, NodePatch, WorkflowDocument, WorkflowInfo};

/// Result of [`GraphStore::update_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
  Updated,
  NotFound,
}

/// Result of [`GraphStore::remove_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
  /// The node was removed, along with every edge touching it.
  Removed { edges_removed: usize },
  NotFound,
}

/// The canonical in-memory state of the workflow being edited.
///
/// One store per edit session; construct with [`GraphStore::new`] and
/// pass it to whatever owns the session. All mutations are synchronous
/// and total: a missing target is reported through the outcome value,
/// never an error or a panic.
///
/// Node insertion order is preserved because the presentation layer
/// renders nodes in collection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
  nodes: Vec<Node>,
  edges: Vec<Edge>,
  selected: Option<String>,
  info: WorkflowInfo,
}

impl GraphStore {
  /// Create an empty store: no nodes, no edges, no selection, default
  /// workflow metadata.
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a node, preserving insertion order.
  ///
  /// Id uniqueness is the caller's responsibility here; use
  /// [`crate::ValidatedGraph`] to have it checked.
  pub fn add_node(&mut self, node: Node) {
    self.nodes.push(node);
  }

  /// Apply a partial update to the node with the given id.
  ///
  /// Fields present in `patch` replace the node's fields wholesale;
  /// absent fields are preserved. Collection order is unchanged. Returns
  /// [`UpdateOutcome::NotFound`] without touching anything when no node
  /// has that id.
  pub fn update_node(&mut self, node_id: &str, patch: NodePatch) -> UpdateOutcome {
    match self.nodes.iter_mut().find(|n| n.id == node_id) {
      Some(node) => {
        patch.apply(node);
        UpdateOutcome::Updated
      }
      None => UpdateOutcome::NotFound,
    }
  }

  /// Remove the node with the given id and every edge whose source or
  /// target is that id, in one operation.
  ///
  /// Observers can never see an intermediate state with the node gone
  /// but its edges still present. Selection is not auto-cleared; readers
  /// go through [`GraphStore::selected_node`], which revalidates.
  pub fn remove_node(&mut self, node_id: &str) -> RemoveOutcome {
    let node_count = self.nodes.len();
    self.nodes.retain(|n| n.id != node_id);
    if self.nodes.len() == node_count {
      return RemoveOutcome::NotFound;
    }

    let edge_count = self.edges.len();
    self.edges.retain(|e| !e.touches(node_id));
    RemoveOutcome::Removed {
      edges_removed: edge_count - self.edges.len(),
    }
  }

  /// Append an edge.
  ///
  /// Endpoints are not validated here; use [`crate::ValidatedGraph`] to
  /// have them checked against the current node collection.
  pub fn add_edge(&mut self, edge: Edge) {
    self.edges.push(edge);
  }

  /// Replace the entire graph state from a loaded document.
  ///
  /// Full overwrite, not a merge: prior nodes, edges, and metadata are
  /// discarded. Selection is left alone.
  pub fn set_workflow(&mut self, document: WorkflowDocument) {
    self.nodes = document.nodes;
    self.edges = document.edges;
    self.info = WorkflowInfo {
      name: document.name,
      description: document.description,
      variables: document.variables,
    };
  }

  /// Reset to the initial empty state: no nodes, no edges, no selection,
  /// default workflow metadata. Idempotent.
  pub fn clear_workflow(&mut self) {
    self.nodes.clear();
    self.edges.clear();
    self.selected = None;
    self.info = WorkflowInfo::default();
  }

  /// Set or clear the selected node id.
  ///
  /// The id is held as a weak reference: it may outlive the node it
  /// names. [`GraphStore::selected_node`] is the liveness-checked reader.
  pub fn select(&mut self, node_id: Option<String>) {
    self.selected = node_id;
  }

  /// The raw selected id, live or not.
  pub fn selected_id(&self) -> Option<&str> {
    self.selected.as_deref()
  }

  /// The selected node, only if a node with the selected id currently
  /// exists in the graph.
  pub fn selected_node(&self) -> Option<&Node> {
    let id = self.selected.as_deref()?;
    self.node(id)
  }

  /// Look up a node by id.
  pub fn node(&self, node_id: &str) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == node_id)
  }

  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn info(&self) -> &WorkflowInfo {
    &self.info
  }

  /// Read the current state out as a document for saving or execution.
  ///
  /// Selection is editing state, not workflow content, and is not part
  /// of the document.
  pub fn document(&self) -> WorkflowDocument {
    WorkflowDocument {
      name: self.info.name.clone(),
      description: self.info.description.clone(),
      nodes: self.nodes.clone(),
      edges: self.edges.clone(),
      variables: self.info.variables.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use weave_document::{NodeData, NodeKind, Position, UNTITLED_NAME};

  use super::*;

  fn node(id: &str) -> Node {
    Node {
      id: id.to_string(),
      renderer: "tool".to_string(),
      data: NodeData {
        kind: NodeKind::Tool,
        label: format!("node {id}"),
        tool_id: None,
        config: HashMap::new(),
      },
      position: Position::default(),
    }
  }

  fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(id, source, target)
  }

  #[test]
  fn add_node_preserves_insertion_order() {
    let mut store = GraphStore::new();
    store.add_node(node("a"));
    store.add_node(node("b"));
    let ids: Vec<&str> = store.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
  }

  #[test]
  fn update_node_merges_and_preserves_untouched_fields() {
    let mut store = GraphStore::new();
    store.add_node(node("a"));
    let outcome = store.update_node(
      "a",
      NodePatch {
        position: Some(Position { x: 5.0, y: 6.0 }),
        ..NodePatch::default()
      },
    );
    assert_eq!(outcome, UpdateOutcome::Updated);
    let updated = store.node("a").unwrap();
    assert_eq!(updated.position, Position { x: 5.0, y: 6.0 });
    assert_eq!(updated.data.label, "node a");
  }

  #[test]
  fn update_missing_node_is_a_reported_noop() {
    let mut store = GraphStore::new();
    store.add_node(node("a"));
    let before = store.clone();
    let outcome = store.update_node(
      "ghost",
      NodePatch {
        renderer: Some("code".to_string()),
        ..NodePatch::default()
      },
    );
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert_eq!(store, before);
  }

  #[test]
  fn remove_node_removes_incident_edges_in_the_same_operation() {
    let mut store = GraphStore::new();
    store.add_node(node("1"));
    store.add_node(node("2"));
    store.add_node(node("3"));
    store.add_edge(edge("e1", "1", "2"));
    store.add_edge(edge("e2", "2", "3"));
    store.add_edge(edge("e3", "3", "1"));

    let outcome = store.remove_node("1");
    assert_eq!(outcome, RemoveOutcome::Removed { edges_removed: 2 });
    assert!(store.node("1").is_none());
    assert!(store.edges().iter().all(|e| !e.touches("1")));
    assert_eq!(store.edges().len(), 1);
  }

  #[test]
  fn remove_missing_node_is_a_reported_noop() {
    let mut store = GraphStore::new();
    store.add_node(node("a"));
    store.add_edge(edge("e1", "a", "a"));
    let before = store.clone();
    assert_eq!(store.remove_node("ghost"), RemoveOutcome::NotFound);
    assert_eq!(store, before);
  }

  #[test]
  fn set_workflow_is_a_full_overwrite() {
    let mut store = GraphStore::new();
    store.add_node(node("old"));
    store.add_edge(edge("e1", "old", "old"));
    store.set_workflow(WorkflowDocument {
      name: "X".to_string(),
      nodes: vec![node("n1")],
      ..WorkflowDocument::default()
    });

    assert_eq!(store.nodes().len(), 1);
    assert_eq!(store.nodes()[0].id, "n1");
    assert!(store.edges().is_empty());
    assert_eq!(store.info().name, "X");
    assert!(store.info().variables.is_empty());
  }

  #[test]
  fn set_workflow_does_not_touch_selection() {
    let mut store = GraphStore::new();
    store.add_node(node("a"));
    store.select(Some("a".to_string()));
    store.set_workflow(WorkflowDocument::default());
    assert_eq!(store.selected_id(), Some("a"));
  }

  #[test]
  fn clear_workflow_resets_everything_and_is_idempotent() {
    let mut store = GraphStore::new();
    store.add_node(node("a"));
    store.add_edge(edge("e1", "a", "a"));
    store.select(Some("a".to_string()));

    store.clear_workflow();
    let cleared = store.clone();
    store.clear_workflow();

    assert_eq!(store, cleared);
    assert!(store.nodes().is_empty());
    assert!(store.edges().is_empty());
    assert_eq!(store.selected_id(), None);
    assert_eq!(store.info().name, UNTITLED_NAME);
  }

  #[test]
  fn selection_is_a_weak_reference() {
    let mut store = GraphStore::new();
    store.add_node(node("a"));
    store.select(Some("a".to_string()));
    assert_eq!(store.selected_node().map(|n| n.id.as_str()), Some("a"));

    store.remove_node("a");
    // the id survives removal; the liveness-checked reader does not lie
    assert_eq!(store.selected_id(), Some("a"));
    assert!(store.selected_node().is_none());
  }

  #[test]
  fn document_reads_out_the_current_state() {
    let mut store = GraphStore::new();
    store.set_workflow(WorkflowDocument {
      name: "Sync".to_string(),
      description: "nightly".to_string(),
      nodes: vec![node("a")],
      edges: vec![edge("e1", "a", "a")],
      variables: HashMap::from([("retries".to_string(), serde_json::json!(2))]),
    });
    store.select(Some("a".to_string()));

    let doc = store.document();
    assert_eq!(doc.name, "Sync");
    assert_eq!(doc.nodes.len(), 1);
    assert_eq!(doc.edges.len(), 1);
    assert_eq!(doc.variables["retries"], 2);
  }
}
