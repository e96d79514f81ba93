//! # Nagare - Workflow Graph Validation and Simulation Engine
//!
//! **Nagare** validates and dry-runs the directed node graphs behind visual
//! HR process editors. A workflow is plain data: start, task, approval,
//! automated, and end nodes joined by directed edges. The engine decides
//! whether that graph is a well-formed process and walks it breadth-first
//! to produce the ordered, human-readable step trace an editor presents as
//! a test run.
//!
//! ## Core Workflow
//!
//! The engine is UI-agnostic. It operates on a canonical [`workflow::Workflow`]
//! document and every entry point takes a plain snapshot of it:
//!
//! 1.  **Build or load a document**: Mutate a [`store::WorkflowStore`] the way a canvas editor would, or parse the camelCase JSON wire format with [`workflow::Workflow::from_json`].
//! 2.  **Validate**: [`validation::validate`] checks the whole graph and returns every structural violation as ordered, user-facing messages.
//! 3.  **Simulate**: [`simulation::simulate`] walks the graph from its start node and reports one step record per reached node, however long the chain.
//! 4.  **Query**: The [`query`] helpers answer ancestry, reachability, and path questions for tooling built on top.
//!
//! ## Quick Start
//!
//! The following example builds a three-step process in memory, checks it,
//! and simulates it.
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut store = WorkflowStore::new("Onboarding");
//!     let start = store.add_node(NodeKind::Start, Position::new(0.0, 100.0));
//!     let task = store.add_node(NodeKind::Task, Position::new(250.0, 100.0));
//!     let end = store.add_node(NodeKind::End, Position::new(500.0, 100.0));
//!     store.add_edge(&start, &task)?;
//!     store.add_edge(&task, &end)?;
//!
//!     let issues = validate(store.current());
//!     assert!(issues.is_empty());
//!
//!     let report = simulate(store.current());
//!     for step in &report.steps {
//!         println!("{}. {}", step.step, step.message);
//!     }
//!     assert_eq!(report.total_steps, 3);
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod prelude;
pub mod query;
pub mod simulation;
pub mod store;
pub mod validation;
pub mod workflow;

mod graph;
