//! Stateless graph queries over a workflow snapshot.
//!
//! These answer the questions tooling asks about a graph without mutating
//! it: who feeds this node, what does it feed, how do I get from A to B,
//! where should everything sit on the canvas. Unknown ids are not errors;
//! they simply have no connections.

use crate::graph;
use crate::workflow::{Position, Workflow};
use ahash::{AHashMap, AHashSet};

/// All node ids with a directed path to `node_id`, in discovery order of
/// a breadth-first walk over incoming edges. The node itself appears only
/// when a cycle leads back to it.
pub fn ancestors(workflow: &Workflow, node_id: &str) -> Vec<String> {
    let adjacency = graph::incoming_adjacency(&workflow.edges);
    graph::collect_transitive(node_id, &adjacency)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// All node ids reachable from `node_id`, in discovery order of a
/// breadth-first walk over outgoing edges. The node itself appears only
/// when a cycle leads back to it.
pub fn descendants(workflow: &Workflow, node_id: &str) -> Vec<String> {
    let adjacency = graph::outgoing_adjacency(&workflow.edges);
    graph::collect_transitive(node_id, &adjacency)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// One simple directed path from `from` to `to`, endpoints included,
/// found depth-first with edge-order preference. Returns an empty
/// sequence when no path exists, and `[from]` when the endpoints are
/// equal.
pub fn path_between(workflow: &Workflow, from: &str, to: &str) -> Vec<String> {
    let adjacency = graph::outgoing_adjacency(&workflow.edges);
    let mut visited = AHashSet::new();
    let mut path = Vec::new();
    walk_path(from, to, &adjacency, &mut visited, &mut path);
    path.into_iter().map(str::to_string).collect()
}

fn walk_path<'a>(
    current: &'a str,
    goal: &str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    visited: &mut AHashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> bool {
    path.push(current);
    if current == goal {
        return true;
    }
    visited.insert(current);
    if let Some(targets) = adjacency.get(current) {
        for &target in targets {
            if !visited.contains(target) && walk_path(target, goal, adjacency, visited, path) {
                return true;
            }
        }
    }
    path.pop();
    false
}

/// Recomputes canvas positions as a left-to-right layered layout.
///
/// Levels are assigned by a first-visit depth-first walk from every root
/// (a node with no incoming edges); the first level a walk reaches a node
/// at wins. `x` advances 250 per level, `y` advances 100 per node within
/// a level in node order, starting at 100. Nodes no walk reaches stay at
/// level 0. Returns `(node id, position)` pairs in node order; the graph
/// itself is untouched.
pub fn layered_layout(workflow: &Workflow) -> Vec<(String, Position)> {
    let adjacency = graph::outgoing_adjacency(&workflow.edges);
    let has_incoming: AHashSet<&str> = workflow
        .edges
        .iter()
        .map(|edge| edge.target.as_str())
        .collect();

    let mut levels: AHashMap<&str, usize> = AHashMap::new();
    for node in &workflow.nodes {
        if !has_incoming.contains(node.id.as_str()) {
            assign_level(node.id.as_str(), 0, &adjacency, &mut levels);
        }
    }

    let mut rows_used: AHashMap<usize, usize> = AHashMap::new();
    workflow
        .nodes
        .iter()
        .map(|node| {
            let level = levels.get(node.id.as_str()).copied().unwrap_or(0);
            let row = rows_used.entry(level).or_insert(0);
            *row += 1;
            let position = Position::new(level as f64 * 250.0, *row as f64 * 100.0);
            (node.id.clone(), position)
        })
        .collect()
}

fn assign_level<'a>(
    node_id: &'a str,
    level: usize,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    levels: &mut AHashMap<&'a str, usize>,
) {
    if levels.contains_key(node_id) {
        return;
    }
    levels.insert(node_id, level);
    if let Some(targets) = adjacency.get(node_id) {
        for &target in targets {
            assign_level(target, level + 1, adjacency, levels);
        }
    }
}
