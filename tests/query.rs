//! Tests for the stateless graph queries: ancestry, paths, and layout.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_ancestors_walk_incoming_edges_in_discovery_order() {
    let workflow = diamond_workflow();
    assert_eq!(ancestors(&workflow, "e"), vec!["a", "b", "s"]);
    assert_eq!(ancestors(&workflow, "a"), vec!["s"]);
    assert_eq!(ancestors(&workflow, "s"), Vec::<String>::new());
}

#[test]
fn test_descendants_walk_outgoing_edges_in_discovery_order() {
    let workflow = diamond_workflow();
    assert_eq!(descendants(&workflow, "s"), vec!["a", "b", "e"]);
    assert_eq!(descendants(&workflow, "b"), vec!["e"]);
    assert_eq!(descendants(&workflow, "e"), Vec::<String>::new());
}

#[test]
fn test_ancestry_includes_self_only_through_cycles() {
    let workflow = workflow_with(
        vec![task("a", "1", ""), task("b", "2", "")],
        vec![edge("a", "b"), edge("b", "a")],
    );
    assert_eq!(ancestors(&workflow, "a"), vec!["b", "a"]);
    assert_eq!(descendants(&workflow, "a"), vec!["b", "a"]);
}

#[test]
fn test_queries_tolerate_unknown_ids() {
    let workflow = diamond_workflow();
    assert!(ancestors(&workflow, "ghost").is_empty());
    assert!(descendants(&workflow, "ghost").is_empty());
    assert!(path_between(&workflow, "ghost", "e").is_empty());
}

#[test]
fn test_path_between_includes_both_endpoints() {
    let workflow = diamond_workflow();
    assert_eq!(path_between(&workflow, "s", "e"), vec!["s", "a", "e"]);
    assert_eq!(path_between(&workflow, "b", "e"), vec!["b", "e"]);
}

#[test]
fn test_path_between_returns_empty_when_unconnected() {
    let workflow = diamond_workflow();
    // Edges are directed; there is no way back.
    assert!(path_between(&workflow, "e", "s").is_empty());
    assert!(path_between(&workflow, "a", "b").is_empty());
}

#[test]
fn test_path_between_equal_endpoints_is_the_single_node() {
    let workflow = diamond_workflow();
    assert_eq!(path_between(&workflow, "s", "s"), vec!["s"]);
}

#[test]
fn test_path_between_backtracks_out_of_dead_ends() {
    let workflow = workflow_with(
        vec![
            start("s", "Go"),
            task("dead", "Dead End", ""),
            task("mid", "Middle", ""),
            end("goal", "Done"),
        ],
        vec![edge("s", "dead"), edge("s", "mid"), edge("mid", "goal")],
    );
    // The first branch leads nowhere; the abandoned prefix must not leak
    // into the returned path.
    assert_eq!(path_between(&workflow, "s", "goal"), vec!["s", "mid", "goal"]);
}

#[test]
fn test_path_between_survives_cycles() {
    let workflow = workflow_with(
        vec![
            start("s", "Go"),
            task("a", "1", ""),
            task("b", "2", ""),
            end("e", "Done"),
        ],
        vec![
            edge("s", "a"),
            edge("a", "b"),
            edge("b", "a"),
            edge("b", "e"),
        ],
    );
    assert_eq!(path_between(&workflow, "s", "e"), vec!["s", "a", "b", "e"]);
}

#[test]
fn test_layered_layout_spaces_levels_and_rows() {
    let positions = layered_layout(&diamond_workflow());
    assert_eq!(
        positions,
        vec![
            ("s".to_string(), Position::new(0.0, 100.0)),
            ("a".to_string(), Position::new(250.0, 100.0)),
            ("b".to_string(), Position::new(250.0, 200.0)),
            ("e".to_string(), Position::new(500.0, 100.0)),
        ]
    );
}

#[test]
fn test_layered_layout_parks_unattached_nodes_at_level_zero() {
    let workflow = workflow_with(
        vec![start("s", "Go"), task("island", "Alone", "")],
        vec![],
    );
    assert_eq!(
        layered_layout(&workflow),
        vec![
            ("s".to_string(), Position::new(0.0, 100.0)),
            ("island".to_string(), Position::new(0.0, 200.0)),
        ]
    );
}

#[test]
fn test_layered_layout_keeps_first_visit_level() {
    // `c` is reachable at depth 1 and depth 2; the first assignment wins.
    let workflow = workflow_with(
        vec![
            start("s", "Go"),
            task("c", "Join", ""),
            task("m", "Middle", ""),
            end("e", "Done"),
        ],
        vec![
            edge("s", "c"),
            edge("s", "m"),
            edge("m", "c"),
            edge("c", "e"),
        ],
    );
    let positions = layered_layout(&workflow);
    let c = positions.iter().find(|(id, _)| id == "c").unwrap();
    assert_eq!(c.1.x, 250.0);
}
