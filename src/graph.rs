//! Shared graph plumbing: adjacency construction and the traversals that
//! validation, simulation, and the query helpers all lean on.

use crate::workflow::{Edge, Node};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Adjacency in the outgoing direction: source id to target ids, in edge
/// insertion order.
pub(crate) fn outgoing_adjacency(edges: &[Edge]) -> AHashMap<&str, Vec<&str>> {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }
    adjacency
}

/// Adjacency in the incoming direction: target id to source ids, in edge
/// insertion order.
pub(crate) fn incoming_adjacency(edges: &[Edge]) -> AHashMap<&str, Vec<&str>> {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.target.as_str())
            .or_default()
            .push(edge.source.as_str());
    }
    adjacency
}

/// Breadth-first traversal from `seed`, following `adjacency`.
///
/// Ids are marked visited when enqueued, so each one enters the queue at
/// most once even on cyclic graphs. The returned order is dequeue order:
/// the seed first, then nodes by hop distance, ties in edge order.
pub(crate) fn breadth_first<'a>(
    seed: &'a str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
) -> Vec<&'a str> {
    let mut visited = AHashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    visited.insert(seed);
    queue.push_back(seed);
    while let Some(current) = queue.pop_front() {
        order.push(current);
        if let Some(targets) = adjacency.get(current) {
            for &target in targets {
                if visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }
    }
    order
}

/// Everything transitively connected to `seed` through `adjacency`, in
/// discovery order. Unlike [`breadth_first`] the seed itself is not part
/// of the result unless some walk loops back to it.
pub(crate) fn collect_transitive<'a>(
    seed: &'a str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
) -> Vec<&'a str> {
    let mut found = AHashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([seed]);
    while let Some(current) = queue.pop_front() {
        if let Some(connected) = adjacency.get(current) {
            for &id in connected {
                if found.insert(id) {
                    order.push(id);
                    queue.push_back(id);
                }
            }
        }
    }
    order
}

/// Depth-first cycle detection over the whole graph, disconnected
/// components included.
pub(crate) fn has_cycle(nodes: &[Node], edges: &[Edge]) -> bool {
    let adjacency = outgoing_adjacency(edges);
    let mut visited = AHashSet::new();
    let mut on_stack = AHashSet::new();
    for node in nodes {
        if !visited.contains(node.id.as_str())
            && dfs_finds_back_edge(node.id.as_str(), &adjacency, &mut visited, &mut on_stack)
        {
            return true;
        }
    }
    false
}

// The verdict of every nested call has to reach the top; a swallowed
// `true` here would miss cycles that close deeper in the walk.
fn dfs_finds_back_edge<'a>(
    node_id: &'a str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    visited: &mut AHashSet<&'a str>,
    on_stack: &mut AHashSet<&'a str>,
) -> bool {
    visited.insert(node_id);
    on_stack.insert(node_id);
    if let Some(targets) = adjacency.get(node_id) {
        for &target in targets {
            if on_stack.contains(target) {
                return true;
            }
            if !visited.contains(target)
                && dfs_finds_back_edge(target, adjacency, visited, on_stack)
            {
                return true;
            }
        }
    }
    on_stack.remove(node_id);
    false
}
