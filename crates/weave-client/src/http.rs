use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use weave_document::{
  ExecutionRecord, ExecutionRequest, NewTool, ToolRecord, WorkflowDocument, WorkflowRecord,
};

use crate::{ClientError, ExecutionApi, ToolApi, WorkflowApi};

/// Per-request timeout. Remote execution is synchronous on the backend,
/// so this bounds a whole workflow run, not just the round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape the backend uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
  detail: String,
}

/// Reqwest-backed client for all three backend routers.
pub struct HttpClient {
  base: Url,
  inner: reqwest::Client,
}

impl HttpClient {
  /// Create a client against the given API base URL, e.g.
  /// `http://localhost:8000/api`.
  pub fn new(base: Url) -> Result<Self, ClientError> {
    // endpoints are joined relative to the base, which requires a
    // trailing slash to keep the last path segment
    let base = if base.path().ends_with('/') {
      base
    } else {
      let mut b = base;
      b.set_path(&format!("{}/", b.path()));
      b
    };
    let inner = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()?;
    Ok(Self { base, inner })
  }

  fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
    Ok(self.base.join(path)?)
  }

  /// Map non-success responses into [`ClientError::Api`], extracting the
  /// backend's `detail` message when the body carries one.
  async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }
    let message = match response.json::<ApiErrorBody>().await {
      Ok(body) => body.detail,
      Err(_) => status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string(),
    };
    Err(ClientError::Api {
      status: status.as_u16(),
      message,
    })
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
    let url = self.endpoint(path)?;
    debug!(%url, "GET");
    let response = self.inner.get(url).send().await?;
    Ok(Self::check(response).await?.json().await?)
  }

  async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    &self,
    path: &str,
    body: &B,
  ) -> Result<T, ClientError> {
    let url = self.endpoint(path)?;
    debug!(%url, "POST");
    let response = self.inner.post(url).json(body).send().await?;
    Ok(Self::check(response).await?.json().await?)
  }

  async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    &self,
    path: &str,
    body: &B,
  ) -> Result<T, ClientError> {
    let url = self.endpoint(path)?;
    debug!(%url, "PUT");
    let response = self.inner.put(url).json(body).send().await?;
    Ok(Self::check(response).await?.json().await?)
  }

  async fn delete(&self, path: &str) -> Result<(), ClientError> {
    let url = self.endpoint(path)?;
    debug!(%url, "DELETE");
    let response = self.inner.delete(url).send().await?;
    Self::check(response).await?;
    Ok(())
  }
}

#[async_trait]
impl ToolApi for HttpClient {
  async fn list_tools(&self) -> Result<Vec<ToolRecord>, ClientError> {
    self.get_json("tools/").await
  }

  async fn get_tool(&self, tool_id: i64) -> Result<ToolRecord, ClientError> {
    self.get_json(&format!("tools/{tool_id}")).await
  }

  async fn create_tool(&self, tool: &NewTool) -> Result<ToolRecord, ClientError> {
    self.post_json("tools/", tool).await
  }

  async fn delete_tool(&self, tool_id: i64) -> Result<(), ClientError> {
    self.delete(&format!("tools/{tool_id}")).await
  }
}

#[async_trait]
impl WorkflowApi for HttpClient {
  async fn list_workflows(&self) -> Result<Vec<WorkflowRecord>, ClientError> {
    self.get_json("workflows/").await
  }

  async fn get_workflow(&self, workflow_id: i64) -> Result<WorkflowRecord, ClientError> {
    self.get_json(&format!("workflows/{workflow_id}")).await
  }

  async fn create_workflow(
    &self,
    document: &WorkflowDocument,
  ) -> Result<WorkflowRecord, ClientError> {
    self.post_json("workflows/", document).await
  }

  async fn update_workflow(
    &self,
    workflow_id: i64,
    document: &WorkflowDocument,
  ) -> Result<WorkflowRecord, ClientError> {
    self
      .put_json(&format!("workflows/{workflow_id}"), document)
      .await
  }

  async fn delete_workflow(&self, workflow_id: i64) -> Result<(), ClientError> {
    self.delete(&format!("workflows/{workflow_id}")).await
  }
}

#[async_trait]
impl ExecutionApi for HttpClient {
  async fn run_workflow(
    &self,
    request: &ExecutionRequest,
  ) -> Result<ExecutionRecord, ClientError> {
    self.post_json("execution/run", request).await
  }

  async fn get_execution_log(&self, execution_id: i64) -> Result<ExecutionRecord, ClientError> {
    self.get_json(&format!("execution/logs/{execution_id}")).await
  }
}
