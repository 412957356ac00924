use std::collections::HashSet;

use weave_document::{Edge, Node, WorkflowDocument};

use crate::error::GraphError;
use crate::store::GraphStore;

/// Check a document for the invariants the validated layer enforces:
/// unique node ids and edge endpoints that name existing nodes.
pub fn validate_document(document: &WorkflowDocument) -> Result<(), GraphError> {
  let mut ids: HashSet<&str> = HashSet::with_capacity(document.nodes.len());
  for node in &document.nodes {
    if !ids.insert(node.id.as_str()) {
      return Err(GraphError::DuplicateNode(node.id.clone()));
    }
  }
  for edge in &document.edges {
    for endpoint in [&edge.source, &edge.target] {
      if !ids.contains(endpoint.as_str()) {
        return Err(GraphError::UnknownEndpoint {
          edge_id: edge.id.clone(),
          endpoint: endpoint.clone(),
        });
      }
    }
  }
  Ok(())
}

/// A strict wrapper over [`GraphStore`].
///
/// The primitive store accepts duplicate ids and dangling edge endpoints
/// by design, trusting its caller. This layer checks both before letting
/// a mutation through; a rejected mutation leaves the store untouched.
/// Reads and the remaining mutations pass straight down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedGraph {
  store: GraphStore,
}

impl ValidatedGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Wrap an existing store. The existing contents are taken as-is; only
  /// mutations from here on are validated.
  pub fn from_store(store: GraphStore) -> Self {
    Self { store }
  }

  /// Append a node, rejecting an id that is already present.
  pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
    if self.store.node(&node.id).is_some() {
      return Err(GraphError::DuplicateNode(node.id));
    }
    self.store.add_node(node);
    Ok(())
  }

  /// Append an edge, rejecting endpoints that are not current node ids.
  pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
    for endpoint in [&edge.source, &edge.target] {
      if self.store.node(endpoint).is_none() {
        return Err(GraphError::UnknownEndpoint {
          edge_id: edge.id.clone(),
          endpoint: endpoint.clone(),
        });
      }
    }
    self.store.add_edge(edge);
    Ok(())
  }

  /// Replace the graph from a document, validating it first. On error
  /// the prior state is fully preserved.
  pub fn set_workflow(&mut self, document: WorkflowDocument) -> Result<(), GraphError> {
    validate_document(&document)?;
    self.store.set_workflow(document);
    Ok(())
  }

  /// Read access to the underlying store.
  pub fn store(&self) -> &GraphStore {
    &self.store
  }

  /// Mutable access to the underlying store, for the operations this
  /// layer adds nothing to (update, remove, clear, selection).
  pub fn store_mut(&mut self) -> &mut GraphStore {
    &mut self.store
  }

  /// Unwrap back into the permissive store.
  pub fn into_inner(self) -> GraphStore {
    self.store
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use weave_document::{NodeData, NodeKind, Position};

  use super::*;

  fn node(id: &str) -> Node {
    Node {
      id: id.to_string(),
      renderer: "tool".to_string(),
      data: NodeData {
        kind: NodeKind::Tool,
        label: id.to_string(),
        tool_id: None,
        config: HashMap::new(),
      },
      position: Position::default(),
    }
  }

  #[test]
  fn rejects_duplicate_node_id() {
    let mut graph = ValidatedGraph::new();
    graph.add_node(node("a")).unwrap();
    let err = graph.add_node(node("a")).unwrap_err();
    assert_eq!(err, GraphError::DuplicateNode("a".to_string()));
    assert_eq!(graph.store().nodes().len(), 1);
  }

  #[test]
  fn rejects_edge_with_unknown_endpoint() {
    let mut graph = ValidatedGraph::new();
    graph.add_node(node("a")).unwrap();
    let err = graph.add_edge(Edge::new("e1", "a", "ghost")).unwrap_err();
    assert_eq!(
      err,
      GraphError::UnknownEndpoint {
        edge_id: "e1".to_string(),
        endpoint: "ghost".to_string(),
      }
    );
    assert!(graph.store().edges().is_empty());
  }

  #[test]
  fn accepts_edge_between_existing_nodes() {
    let mut graph = ValidatedGraph::new();
    graph.add_node(node("a")).unwrap();
    graph.add_node(node("b")).unwrap();
    graph.add_edge(Edge::new("e1", "a", "b")).unwrap();
    assert_eq!(graph.store().edges().len(), 1);
  }

  #[test]
  fn rejected_document_leaves_state_untouched() {
    let mut graph = ValidatedGraph::new();
    graph.add_node(node("keep")).unwrap();
    let before = graph.clone();

    let bad = WorkflowDocument {
      nodes: vec![node("x")],
      edges: vec![Edge::new("e1", "x", "missing")],
      ..WorkflowDocument::default()
    };
    assert!(graph.set_workflow(bad).is_err());
    assert_eq!(graph, before);
  }

  #[test]
  fn validate_document_flags_duplicate_ids() {
    let doc = WorkflowDocument {
      nodes: vec![node("a"), node("a")],
      ..WorkflowDocument::default()
    };
    assert_eq!(
      validate_document(&doc),
      Err(GraphError::DuplicateNode("a".to_string()))
    );
  }

  #[test]
  fn validate_document_accepts_a_consistent_graph() {
    let doc = WorkflowDocument {
      nodes: vec![node("a"), node("b")],
      edges: vec![Edge::new("e1", "a", "b")],
      ..WorkflowDocument::default()
    };
    assert_eq!(validate_document(&doc), Ok(()));
  }
}
