use crate::workflow::NodeKind;
use thiserror::Error;

/// Structural rule violations reported by workflow validation.
///
/// The `Display` strings are the canonical user-facing messages; editors
/// render them verbatim, so they are part of the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Workflow must have at least one node")]
    EmptyWorkflow,

    #[error("Workflow must have exactly one Start node")]
    MissingStart,

    #[error("Workflow cannot have more than one Start node")]
    MultipleStart,

    #[error("Workflow must have at least one End node")]
    MissingEnd,

    #[error("Workflow cannot contain cycles")]
    CycleDetected,

    #[error("{kind} node ({node_id}) cannot have more than {limit} incoming connections")]
    TooManyIncoming {
        kind: NodeKind,
        node_id: String,
        limit: usize,
    },

    #[error("{kind} node ({node_id}) must have at least {limit} incoming connection")]
    TooFewIncoming {
        kind: NodeKind,
        node_id: String,
        limit: usize,
    },

    #[error("{kind} node ({node_id}) cannot have more than {limit} outgoing connections")]
    TooManyOutgoing {
        kind: NodeKind,
        node_id: String,
        limit: usize,
    },

    #[error("{kind} node ({node_id}) must have at least {limit} outgoing connection")]
    TooFewOutgoing {
        kind: NodeKind,
        node_id: String,
        limit: usize,
    },

    #[error("Node {node_id} is unreachable from Start node")]
    Unreachable { node_id: String },
}

/// Structural failures that stop a simulation run before it starts.
///
/// Deliberately weaker than full validation: simulation only refuses
/// workflows it cannot traverse at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Workflow must have at least one node")]
    EmptyWorkflow,

    #[error("Workflow must have a Start node")]
    MissingStart,

    #[error("Workflow must have an End node")]
    MissingEnd,
}

/// Errors raised by `WorkflowStore` mutations.
///
/// `Display` and `Error` are implemented by hand: `DuplicateEdge.source` is
/// edge data, and `derive(Error)` would insist a field named `source` is the
/// error's cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NodeNotFound { node_id: String },

    EdgeNotFound { edge_id: String },

    WorkflowNotFound { workflow_id: String },

    SelfLoop { node_id: String },

    DuplicateEdge { source: String, target: String },

    InvalidNodeData(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NodeNotFound { node_id } => {
                write!(f, "Node '{node_id}' does not exist in the current workflow")
            }
            StoreError::EdgeNotFound { edge_id } => {
                write!(f, "Edge '{edge_id}' does not exist in the current workflow")
            }
            StoreError::WorkflowNotFound { workflow_id } => {
                write!(f, "No saved workflow with id '{workflow_id}'")
            }
            StoreError::SelfLoop { node_id } => {
                write!(f, "An edge cannot connect node '{node_id}' to itself")
            }
            StoreError::DuplicateEdge { source, target } => {
                write!(f, "An edge from '{source}' to '{target}' already exists")
            }
            StoreError::InvalidNodeData(detail) => write!(f, "Invalid node data: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors that can occur while reading or writing whole workflow documents.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Failed to parse workflow JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not access workflow file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
