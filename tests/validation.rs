//! Tests for structural workflow validation: rule coverage, message
//! ordering, and the fixed check order.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_valid_linear_workflow_has_no_issues() {
    assert!(validate(&linear_workflow()).is_empty());
}

#[test]
fn test_valid_diamond_workflow_has_no_issues() {
    assert!(validate(&diamond_workflow()).is_empty());
}

#[test]
fn test_valid_full_chain_has_no_issues() {
    assert!(validate(&full_chain_workflow()).is_empty());
}

#[test]
fn test_empty_workflow_short_circuits() {
    let issues = validate(&workflow_with(vec![], vec![]));
    assert_eq!(issues, vec![ValidationIssue::EmptyWorkflow]);
}

#[test]
fn test_missing_start_node() {
    let workflow = workflow_with(
        vec![task("t", "Review", "Alice"), end("e", "Done")],
        vec![edge("t", "e")],
    );
    // Reachability is skipped without a unique start, so only the
    // cardinality and degree findings remain.
    assert_eq!(
        validate(&workflow),
        vec![
            ValidationIssue::MissingStart,
            ValidationIssue::TooFewIncoming {
                kind: NodeKind::Task,
                node_id: "t".to_string(),
                limit: 1,
            },
        ]
    );
}

#[test]
fn test_multiple_start_nodes() {
    let workflow = workflow_with(
        vec![start("s1", "A"), start("s2", "B"), end("e", "Done")],
        vec![edge("s1", "e"), edge("s2", "e")],
    );
    assert_eq!(validate(&workflow), vec![ValidationIssue::MultipleStart]);
}

#[test]
fn test_missing_end_node() {
    let workflow = workflow_with(
        vec![start("s", "Go"), task("t", "Review", "Alice")],
        vec![edge("s", "t")],
    );
    assert_eq!(
        validate(&workflow),
        vec![
            ValidationIssue::MissingEnd,
            ValidationIssue::TooFewOutgoing {
                kind: NodeKind::Task,
                node_id: "t".to_string(),
                limit: 1,
            },
        ]
    );
}

#[test]
fn test_cycle_in_reachable_graph() {
    let workflow = workflow_with(
        vec![
            start("s", "Go"),
            task("a", "First", ""),
            task("b", "Second", ""),
            end("e", "Done"),
        ],
        vec![
            edge("s", "a"),
            edge("a", "b"),
            edge("b", "a"),
            edge("b", "e"),
        ],
    );
    assert_eq!(validate(&workflow), vec![ValidationIssue::CycleDetected]);
}

#[test]
fn test_cycle_in_disconnected_component() {
    // The main path is fine; a two-task island cycles among itself.
    let workflow = workflow_with(
        vec![
            start("s", "Go"),
            end("e", "Done"),
            task("c1", "Island", ""),
            task("c2", "Island", ""),
        ],
        vec![
            edge("s", "e"),
            edge("c1", "c2"),
            edge("c2", "c1"),
        ],
    );
    assert_eq!(
        validate(&workflow),
        vec![
            ValidationIssue::CycleDetected,
            ValidationIssue::Unreachable {
                node_id: "c1".to_string(),
            },
            ValidationIssue::Unreachable {
                node_id: "c2".to_string(),
            },
        ]
    );
}

#[test]
fn test_cycle_closing_deep_in_a_chain() {
    // The back edge sits four hops into the walk; the verdict has to
    // propagate all the way out of the nested traversal.
    let workflow = workflow_with(
        vec![
            start("s", "Go"),
            task("a", "1", ""),
            task("b", "2", ""),
            task("c", "3", ""),
            task("d", "4", ""),
            end("e", "Done"),
        ],
        vec![
            edge("s", "a"),
            edge("a", "b"),
            edge("b", "c"),
            edge("c", "d"),
            edge("d", "a"),
            edge("d", "e"),
        ],
    );
    let issues = validate(&workflow);
    assert!(issues.contains(&ValidationIssue::CycleDetected), "{:?}", issues);
}

#[test]
fn test_self_loop_counts_as_cycle() {
    // A self-loop cannot be built through the store, but raw JSON can
    // carry one.
    let workflow = workflow_with(
        vec![start("s", "Go"), task("t", "Loop", ""), end("e", "Done")],
        vec![edge("s", "t"), edge("t", "t"), edge("t", "e")],
    );
    let issues = validate(&workflow);
    assert!(issues.contains(&ValidationIssue::CycleDetected), "{:?}", issues);
}

#[test]
fn test_degree_violations_in_node_order() {
    // An edge into the start, an end with an outgoing edge, and both
    // reported per node in max-in, min-in, max-out, min-out order.
    let workflow = workflow_with(
        vec![start("s", "Go"), task("t", "Review", ""), end("e", "Done")],
        vec![edge("t", "s"), edge("e", "t")],
    );
    assert_eq!(
        validate(&workflow),
        vec![
            ValidationIssue::TooManyIncoming {
                kind: NodeKind::Start,
                node_id: "s".to_string(),
                limit: 0,
            },
            ValidationIssue::TooFewOutgoing {
                kind: NodeKind::Start,
                node_id: "s".to_string(),
                limit: 1,
            },
            ValidationIssue::TooFewIncoming {
                kind: NodeKind::End,
                node_id: "e".to_string(),
                limit: 1,
            },
            ValidationIssue::TooManyOutgoing {
                kind: NodeKind::End,
                node_id: "e".to_string(),
                limit: 0,
            },
            ValidationIssue::Unreachable {
                node_id: "t".to_string(),
            },
            ValidationIssue::Unreachable {
                node_id: "e".to_string(),
            },
        ]
    );
}

#[test]
fn test_intermediate_kinds_need_both_directions() {
    for node in [
        task("x", "Task", ""),
        approval("x", "Approval", ApproverRole::Manager),
        automated("x", "Automated", "send-email"),
    ] {
        let kind = node.kind();
        let workflow = workflow_with(
            vec![start("s", "Go"), node, end("e", "Done")],
            vec![edge("s", "e")],
        );
        let issues = validate(&workflow);
        assert!(
            issues.contains(&ValidationIssue::TooFewIncoming {
                kind,
                node_id: "x".to_string(),
                limit: 1,
            }),
            "{:?}",
            issues
        );
        assert!(
            issues.contains(&ValidationIssue::TooFewOutgoing {
                kind,
                node_id: "x".to_string(),
                limit: 1,
            }),
            "{:?}",
            issues
        );
    }
}

#[test]
fn test_unreachable_node_is_reported() {
    let workflow = workflow_with(
        vec![
            start("s", "Go"),
            end("e", "Done"),
            task("orphan", "Forgotten", ""),
        ],
        vec![edge("s", "e"), edge("orphan", "e")],
    );
    let issues = validate(&workflow);
    assert!(
        issues.contains(&ValidationIssue::Unreachable {
            node_id: "orphan".to_string(),
        }),
        "{:?}",
        issues
    );
    assert_eq!(
        issues.last().unwrap().to_string(),
        "Node orphan is unreachable from Start node"
    );
}

#[test]
fn test_duplicate_edges_count_individually() {
    // Duplicates can only arrive through raw JSON. Degree checks count
    // the edge list as given and the walk still terminates.
    let mut workflow = linear_workflow();
    workflow.edges.push(edge("s", "t"));
    assert!(validate(&workflow).is_empty());
}

#[test]
fn test_dangling_edge_does_not_panic() {
    // Edges referencing unknown ids contribute degree counts for the
    // known endpoint and nothing else.
    let mut workflow = linear_workflow();
    workflow.edges.push(edge("t", "ghost"));
    assert!(validate(&workflow).is_empty());
}

#[test]
fn test_validate_never_mutates_the_document() {
    let workflow = diamond_workflow();
    let before = workflow.clone();
    let _ = validate(&workflow);
    assert_eq!(workflow, before);
}
