//! Breadth-first dry-run execution of workflow graphs.
//!
//! [`simulate`] never executes anything for real: it walks the graph the
//! way the runtime would and reports one human-readable record per node
//! it reaches, in visit order.

mod message;

use crate::error::SimulationError;
use crate::graph;
use crate::workflow::{NodeKind, Workflow};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Execution state of a single simulated step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Processing,
    Success,
    Error,
}

/// Overall outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    Success,
    Error,
}

/// One executed node in the simulated trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    /// 1-based position in the trace.
    pub step: usize,
    pub node_id: String,
    pub node_type: NodeKind,
    pub message: String,
    pub status: StepStatus,
}

/// The full result of a simulation run, shaped for direct JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub status: SimulationStatus,
    pub steps: Vec<StepRecord>,
    pub errors: Vec<String>,
    pub total_steps: usize,
    pub execution_time_ms: u64,
}

/// Walks the workflow breadth-first from its start node and reports a
/// step-by-step trace.
///
/// Only the conditions traversal cannot do without are enforced up front:
/// the graph must be non-empty and contain a start and an end node. A
/// workflow that full validation would reject for other reasons (cycles,
/// degree violations, several starts) still simulates; the visited set
/// keeps cyclic graphs terminating, extra start nodes are ignored in
/// favor of the first one, and unreachable nodes are simply absent from
/// the trace. There is no cap on trace length.
pub fn simulate(workflow: &Workflow) -> SimulationReport {
    let started = Instant::now();

    let start_node = workflow.nodes_of_kind(NodeKind::Start).next();

    let mut gate = Vec::new();
    if workflow.nodes.is_empty() {
        gate.push(SimulationError::EmptyWorkflow);
    }
    if start_node.is_none() {
        gate.push(SimulationError::MissingStart);
    }
    if workflow.nodes_of_kind(NodeKind::End).next().is_none() {
        gate.push(SimulationError::MissingEnd);
    }

    match start_node {
        Some(start_node) if gate.is_empty() => {
            let adjacency = graph::outgoing_adjacency(&workflow.edges);
            let steps: Vec<StepRecord> = graph::breadth_first(start_node.id.as_str(), &adjacency)
                .into_iter()
                .filter_map(|node_id| workflow.node(node_id))
                .enumerate()
                .map(|(index, node)| StepRecord {
                    step: index + 1,
                    node_id: node.id.clone(),
                    node_type: node.kind(),
                    message: message::step_message(node),
                    status: StepStatus::Success,
                })
                .collect();

            let total_steps = steps.len();
            tracing::debug!(
                workflow_id = %workflow.id,
                steps = total_steps,
                "Simulation completed"
            );
            SimulationReport {
                status: SimulationStatus::Success,
                steps,
                errors: Vec::new(),
                total_steps,
                execution_time_ms: started.elapsed().as_millis() as u64,
            }
        }
        _ => {
            tracing::debug!(
                workflow_id = %workflow.id,
                errors = gate.len(),
                "Simulation rejected"
            );
            SimulationReport {
                status: SimulationStatus::Error,
                steps: Vec::new(),
                errors: gate.iter().map(|error| error.to_string()).collect(),
                total_steps: 0,
                execution_time_ms: 0,
            }
        }
    }
}
