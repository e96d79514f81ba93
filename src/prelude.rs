//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! the nagare crate. Import this module to get access to the core
//! functionality without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a workflow document and check it
//! let workflow = Workflow::from_file("path/to/workflow.json")?;
//!
//! let issues = validate(&workflow);
//! if issues.is_empty() {
//!     let report = simulate(&workflow);
//!     println!("Simulated {} steps", report.total_steps);
//! }
//! # Ok(())
//! # }
//! ```

// Workflow document model
pub use crate::workflow::{
    ApprovalData, ApproverRole, AutomatedData, CustomField, Edge, EndData, Node, NodeData,
    NodeKind, Position, StartData, TaskData, Workflow,
};

// Validation and simulation entry points
pub use crate::simulation::{
    simulate, SimulationReport, SimulationStatus, StepRecord, StepStatus,
};
pub use crate::validation::{validate, validate_node_data};

// Graph queries
pub use crate::query::{ancestors, descendants, layered_layout, path_between};

// Editor state container
pub use crate::store::{SubscriptionId, WorkflowStore};

// Catalog reference data
pub use crate::catalog::{
    action, actions, template, templates, ActionDescriptor, TemplateDescriptor,
};

// Error types
pub use crate::error::{SimulationError, StoreError, ValidationIssue, WorkflowError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
