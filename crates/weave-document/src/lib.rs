//! Weave Document
//!
//! This crate contains the serializable workflow document types for Weave.
//! These types describe the shapes exchanged with the backend service:
//! workflow documents (nodes + edges + metadata), tool records, and
//! execution records.
//!
//! Documents can come from:
//! - JSON files (via CLI with `weave check workflow.json`)
//! - The backend API (as JSON response bodies)
//!
//! The graph core (`weave-graph`) operates on these types; it holds the
//! editing state and integrity logic, while this crate stays pure data.

mod edge;
mod execution;
mod node;
mod tool;
mod workflow;

pub use edge::Edge;
pub use execution::{ExecutionRecord, ExecutionRequest, ExecutionStatus, LogEntry};
pub use node::{Node, NodeData, NodeKind, NodePatch, Position};
pub use tool::{NewTool, ToolRecord};
pub use workflow::{UNTITLED_NAME, WorkflowDocument, WorkflowInfo, WorkflowRecord};
