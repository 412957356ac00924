//! Weave Client
//!
//! This crate provides the typed API clients for the Weave backend. The
//! graph core never talks to the network; documents read out of the
//! store are handed to these clients, and loaded documents flow back in
//! through the store's `set_workflow`.
//!
//! One trait per backend router:
//! - [`ToolApi`] — the tool registry (`/tools/`)
//! - [`WorkflowApi`] — workflow persistence (`/workflows/`)
//! - [`ExecutionApi`] — remote execution (`/execution/`)
//!
//! [`HttpClient`] implements all three over reqwest.

mod http;

pub use http::HttpClient;

use async_trait::async_trait;
use weave_document::{
  ExecutionRecord, ExecutionRequest, NewTool, ToolRecord, WorkflowDocument, WorkflowRecord,
};

/// Error type for backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
  /// Transport-level failure (connection, timeout, body decode).
  #[error("request failed: {0}")]
  Http(#[from] reqwest::Error),

  /// The configured base URL or a derived endpoint is invalid.
  #[error("invalid url: {0}")]
  Url(#[from] url::ParseError),

  /// The backend answered with a non-success status.
  #[error("api error ({status}): {message}")]
  Api { status: u16, message: String },
}

/// Tool registry operations.
#[async_trait]
pub trait ToolApi: Send + Sync {
  async fn list_tools(&self) -> Result<Vec<ToolRecord>, ClientError>;

  async fn get_tool(&self, tool_id: i64) -> Result<ToolRecord, ClientError>;

  async fn create_tool(&self, tool: &NewTool) -> Result<ToolRecord, ClientError>;

  async fn delete_tool(&self, tool_id: i64) -> Result<(), ClientError>;
}

/// Workflow persistence operations.
#[async_trait]
pub trait WorkflowApi: Send + Sync {
  async fn list_workflows(&self) -> Result<Vec<WorkflowRecord>, ClientError>;

  async fn get_workflow(&self, workflow_id: i64) -> Result<WorkflowRecord, ClientError>;

  async fn create_workflow(
    &self,
    document: &WorkflowDocument,
  ) -> Result<WorkflowRecord, ClientError>;

  async fn update_workflow(
    &self,
    workflow_id: i64,
    document: &WorkflowDocument,
  ) -> Result<WorkflowRecord, ClientError>;

  async fn delete_workflow(&self, workflow_id: i64) -> Result<(), ClientError>;
}

/// Remote execution operations.
#[async_trait]
pub trait ExecutionApi: Send + Sync {
  /// Submit a stored workflow for execution. The returned record carries
  /// the final status and logs; the backend runs synchronously.
  async fn run_workflow(&self, request: &ExecutionRequest) -> Result<ExecutionRecord, ClientError>;

  /// Fetch the record of a past execution by its id.
  async fn get_execution_log(&self, execution_id: i64) -> Result<ExecutionRecord, ClientError>;
}
