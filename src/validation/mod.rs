//! Structural validation of workflow graphs.
//!
//! [`validate`] accumulates every rule violation in a fixed check order
//! and returns them as data; it never fails and never stops at the first
//! problem (an empty workflow being the one exception, since nothing else
//! is checkable). Payload-level checks live in [`validate_node_data`].

mod node_data;

pub use node_data::validate_node_data;

use crate::error::ValidationIssue;
use crate::graph;
use crate::workflow::{NodeKind, Workflow};
use ahash::{AHashMap, AHashSet};

/// Bounds on a node's edge counts. `None` means unbounded in that
/// direction.
struct DegreeRule {
    max_incoming: Option<usize>,
    min_incoming: Option<usize>,
    max_outgoing: Option<usize>,
    min_outgoing: Option<usize>,
}

fn degree_rule(kind: NodeKind) -> DegreeRule {
    match kind {
        NodeKind::Start => DegreeRule {
            max_incoming: Some(0),
            min_incoming: None,
            max_outgoing: None,
            min_outgoing: Some(1),
        },
        NodeKind::End => DegreeRule {
            max_incoming: None,
            min_incoming: Some(1),
            max_outgoing: Some(0),
            min_outgoing: None,
        },
        NodeKind::Task | NodeKind::Approval | NodeKind::Automated => DegreeRule {
            max_incoming: None,
            min_incoming: Some(1),
            max_outgoing: None,
            min_outgoing: Some(1),
        },
    }
}

/// Checks a workflow against every structural rule.
///
/// Issues come back in check order: empty graph, start/end cardinality,
/// cycles, per-node degree bounds in node order, then reachability. An
/// empty result means the workflow is well-formed. Reachability is only
/// meaningful from a single entry point, so it is skipped whenever the
/// start-node count is already wrong.
pub fn validate(workflow: &Workflow) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if workflow.nodes.is_empty() {
        issues.push(ValidationIssue::EmptyWorkflow);
        return issues;
    }

    let start_count = workflow.nodes_of_kind(NodeKind::Start).count();
    if start_count == 0 {
        issues.push(ValidationIssue::MissingStart);
    } else if start_count > 1 {
        issues.push(ValidationIssue::MultipleStart);
    }

    if workflow.nodes_of_kind(NodeKind::End).count() == 0 {
        issues.push(ValidationIssue::MissingEnd);
    }

    if graph::has_cycle(&workflow.nodes, &workflow.edges) {
        issues.push(ValidationIssue::CycleDetected);
    }

    check_degrees(workflow, &mut issues);

    if start_count == 1 {
        check_reachability(workflow, &mut issues);
    }

    tracing::debug!(
        workflow_id = %workflow.id,
        issues = issues.len(),
        "Workflow validated"
    );
    issues
}

/// Degree counts are taken over the edge list as given; duplicate edges
/// count once each.
fn check_degrees(workflow: &Workflow, issues: &mut Vec<ValidationIssue>) {
    let mut in_degree: AHashMap<&str, usize> = AHashMap::new();
    let mut out_degree: AHashMap<&str, usize> = AHashMap::new();
    for edge in &workflow.edges {
        *out_degree.entry(edge.source.as_str()).or_insert(0) += 1;
        *in_degree.entry(edge.target.as_str()).or_insert(0) += 1;
    }

    for node in &workflow.nodes {
        let kind = node.kind();
        let rule = degree_rule(kind);
        let incoming = in_degree.get(node.id.as_str()).copied().unwrap_or(0);
        let outgoing = out_degree.get(node.id.as_str()).copied().unwrap_or(0);

        if let Some(limit) = rule.max_incoming {
            if incoming > limit {
                issues.push(ValidationIssue::TooManyIncoming {
                    kind,
                    node_id: node.id.clone(),
                    limit,
                });
            }
        }
        if let Some(limit) = rule.min_incoming {
            if incoming < limit {
                issues.push(ValidationIssue::TooFewIncoming {
                    kind,
                    node_id: node.id.clone(),
                    limit,
                });
            }
        }
        if let Some(limit) = rule.max_outgoing {
            if outgoing > limit {
                issues.push(ValidationIssue::TooManyOutgoing {
                    kind,
                    node_id: node.id.clone(),
                    limit,
                });
            }
        }
        if let Some(limit) = rule.min_outgoing {
            if outgoing < limit {
                issues.push(ValidationIssue::TooFewOutgoing {
                    kind,
                    node_id: node.id.clone(),
                    limit,
                });
            }
        }
    }
}

fn check_reachability(workflow: &Workflow, issues: &mut Vec<ValidationIssue>) {
    let Some(start) = workflow.nodes_of_kind(NodeKind::Start).next() else {
        return;
    };
    let adjacency = graph::outgoing_adjacency(&workflow.edges);
    let reached: AHashSet<&str> = graph::breadth_first(start.id.as_str(), &adjacency)
        .into_iter()
        .collect();
    for node in &workflow.nodes {
        if !reached.contains(node.id.as_str()) {
            issues.push(ValidationIssue::Unreachable {
                node_id: node.id.clone(),
            });
        }
    }
}
