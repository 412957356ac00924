use thiserror::Error;

/// Errors reported by the validated graph layer.
///
/// The underlying [`crate::GraphStore`] never produces these; only
/// [`crate::ValidatedGraph`] and [`crate::validate_document`] do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
  #[error("node id already present: {0}")]
  DuplicateNode(String),

  #[error("edge {edge_id} references unknown node: {endpoint}")]
  UnknownEndpoint { edge_id: String, endpoint: String },
}
