//! Weave Graph
//!
//! This crate provides the in-memory graph store for a workflow being
//! edited. It is the single source of truth for nodes, edges, workflow
//! metadata, and selection, and it keeps the graph referentially intact
//! as the user edits: removing a node removes every edge touching it in
//! the same operation, so no dangling edge is ever observable.
//!
//! Two layers are exposed:
//! - [`GraphStore`] — the permissive primitive. Mutations never fail;
//!   operations on missing ids report a not-found outcome instead of
//!   erroring, which suits an interactively edited document.
//! - [`ValidatedGraph`] — an opt-in strict wrapper that rejects
//!   duplicate node ids and edges with unknown endpoints before they
//!   reach the store.
//!
//! The store holds state only. Persistence and execution happen through
//! the backend clients in `weave-client`; documents flow in via
//! [`GraphStore::set_workflow`] and out via [`GraphStore::document`].

mod error;
mod store;
mod validated;

pub use error::GraphError;
pub use store::{GraphStore, RemoveOutcome, UpdateOutcome};
pub use validated::{ValidatedGraph, validate_document};
