use std::future::Future;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use weave_client::{ExecutionApi, HttpClient, ToolApi, WorkflowApi};
use weave_document::{ExecutionRecord, ExecutionRequest, ExecutionStatus, WorkflowDocument};
use weave_graph::{GraphStore, validate_document};

/// Weave - client for a visual workflow builder
#[derive(Parser)]
#[command(name = "weave")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Base URL of the backend API
  #[arg(long, global = true, default_value = "http://localhost:8000/api")]
  server: Url,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate a workflow document file and print a summary
  Check {
    /// Path to the workflow document (JSON)
    file: PathBuf,
  },

  /// Fetch a workflow from the backend and print it as JSON
  Pull {
    /// The workflow id
    id: i64,
  },

  /// Create or update a workflow on the backend from a document file
  Push {
    /// Path to the workflow document (JSON)
    file: PathBuf,

    /// Update this existing workflow instead of creating a new one
    #[arg(long)]
    id: Option<i64>,
  },

  /// Execute a stored workflow, reading input data from stdin
  Run {
    /// The workflow id
    id: i64,
  },

  /// Fetch the log of a past execution
  Logs {
    /// The execution id
    id: i64,
  },

  /// List the tools registered with the backend
  Tools,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Check { file }) => check(file),
    Some(Commands::Pull { id }) => block_on(pull(cli.server, id)),
    Some(Commands::Push { file, id }) => block_on(push(cli.server, file, id)),
    Some(Commands::Run { id }) => block_on(run(cli.server, id)),
    Some(Commands::Logs { id }) => block_on(logs(cli.server, id)),
    Some(Commands::Tools) => block_on(tools(cli.server)),
    None => {
      println!("weave - use --help to see available commands");
      Ok(())
    }
  }
}

fn block_on<F: Future<Output = Result<()>>>(fut: F) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(fut)
}

fn read_document(file: &PathBuf) -> Result<WorkflowDocument> {
  let content = std::fs::read_to_string(file)
    .with_context(|| format!("failed to read workflow file: {}", file.display()))?;
  serde_json::from_str(&content)
    .with_context(|| format!("failed to parse workflow file: {}", file.display()))
}

fn check(file: PathBuf) -> Result<()> {
  let document = read_document(&file)?;
  validate_document(&document).context("workflow document failed validation")?;

  let mut store = GraphStore::new();
  store.set_workflow(document);

  eprintln!("Workflow: {}", store.info().name);
  if !store.info().description.is_empty() {
    eprintln!("Description: {}", store.info().description);
  }
  eprintln!("Nodes: {}", store.nodes().len());
  eprintln!("Edges: {}", store.edges().len());
  eprintln!("Variables: {}", store.info().variables.len());
  println!("ok");

  Ok(())
}

async fn pull(server: Url, id: i64) -> Result<()> {
  let client = HttpClient::new(server).context("failed to create API client")?;
  let record = client
    .get_workflow(id)
    .await
    .with_context(|| format!("failed to fetch workflow {id}"))?;

  println!("{}", serde_json::to_string_pretty(&record)?);
  Ok(())
}

async fn push(server: Url, file: PathBuf, id: Option<i64>) -> Result<()> {
  let document = read_document(&file)?;
  validate_document(&document).context("refusing to push an inconsistent workflow document")?;

  let client = HttpClient::new(server).context("failed to create API client")?;
  let record = match id {
    Some(id) => client
      .update_workflow(id, &document)
      .await
      .with_context(|| format!("failed to update workflow {id}"))?,
    None => client
      .create_workflow(&document)
      .await
      .context("failed to create workflow")?,
  };

  eprintln!("Saved workflow {} ({})", record.id, record.document.name);
  println!("{}", serde_json::to_string_pretty(&record)?);
  Ok(())
}

async fn run(server: Url, id: i64) -> Result<()> {
  let input_data = read_input_from_stdin()?;
  eprintln!("Input: {}", serde_json::to_string(&input_data)?);

  let client = HttpClient::new(server).context("failed to create API client")?;
  let record = client
    .run_workflow(&ExecutionRequest {
      workflow_id: id,
      input_data,
    })
    .await
    .with_context(|| format!("failed to execute workflow {id}"))?;

  print_execution(&record)?;
  if record.status == ExecutionStatus::Failed {
    anyhow::bail!("execution {} failed", record.id);
  }
  Ok(())
}

async fn logs(server: Url, id: i64) -> Result<()> {
  let client = HttpClient::new(server).context("failed to create API client")?;
  let record = client
    .get_execution_log(id)
    .await
    .with_context(|| format!("failed to fetch execution log {id}"))?;

  print_execution(&record)?;
  Ok(())
}

async fn tools(server: Url) -> Result<()> {
  let client = HttpClient::new(server).context("failed to create API client")?;
  let tools = client.list_tools().await.context("failed to list tools")?;

  for tool in &tools {
    println!("{:>4}  {:<12} {:<24} {}", tool.id, tool.category, tool.name, tool.description);
  }
  eprintln!("{} tool(s)", tools.len());
  Ok(())
}

fn print_execution(record: &ExecutionRecord) -> Result<()> {
  eprintln!("Execution {}: {:?}", record.id, record.status);
  for entry in &record.logs {
    eprintln!("[{}] {}", entry.level, entry.message);
  }
  if let Some(output) = &record.output_data {
    println!("{}", serde_json::to_string_pretty(output)?);
  }
  Ok(())
}

fn read_input_from_stdin() -> Result<std::collections::HashMap<String, serde_json::Value>> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    // No stdin pipe, use empty input
    Ok(Default::default())
  } else {
    let mut input = String::new();
    io::stdin()
      .read_to_string(&mut input)
      .context("failed to read input data from stdin")?;

    if input.trim().is_empty() {
      Ok(Default::default())
    } else {
      serde_json::from_str(&input).context("failed to parse input JSON from stdin")
    }
  }
}
