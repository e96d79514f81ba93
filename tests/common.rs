//! Common test utilities for building workflow documents.
use nagare::prelude::*;

/// A bare node with the given payload. Position is irrelevant to the
/// engine, so every builder parks nodes at the origin.
#[allow(dead_code)]
pub fn node(id: &str, data: NodeData) -> Node {
    Node::new(id, data, Position::default())
}

#[allow(dead_code)]
pub fn start(id: &str, title: &str) -> Node {
    node(
        id,
        NodeData::Start(StartData {
            title: title.to_string(),
            ..StartData::default()
        }),
    )
}

#[allow(dead_code)]
pub fn task(id: &str, title: &str, assignee: &str) -> Node {
    node(
        id,
        NodeData::Task(TaskData {
            title: title.to_string(),
            assignee: assignee.to_string(),
            ..TaskData::default()
        }),
    )
}

#[allow(dead_code)]
pub fn approval(id: &str, title: &str, approver_role: ApproverRole) -> Node {
    node(
        id,
        NodeData::Approval(ApprovalData {
            title: title.to_string(),
            approver_role,
            ..ApprovalData::default()
        }),
    )
}

#[allow(dead_code)]
pub fn automated(id: &str, title: &str, action_id: &str) -> Node {
    node(
        id,
        NodeData::Automated(AutomatedData {
            title: title.to_string(),
            action_id: action_id.to_string(),
            ..AutomatedData::default()
        }),
    )
}

#[allow(dead_code)]
pub fn end(id: &str, end_message: &str) -> Node {
    node(
        id,
        NodeData::End(EndData {
            end_message: end_message.to_string(),
            ..EndData::default()
        }),
    )
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> Edge {
    Edge::between(source, target)
}

/// Wraps nodes and edges into a workflow document named "Test Workflow".
#[allow(dead_code)]
pub fn workflow_with(nodes: Vec<Node>, edges: Vec<Edge>) -> Workflow {
    let mut workflow = Workflow::new("Test Workflow");
    workflow.nodes = nodes;
    workflow.edges = edges;
    workflow
}

/// The canonical three-step document: an untitled start node, a task
/// assigned to Alice, and an end node.
///
/// Graph: `s -> t -> e`
#[allow(dead_code)]
pub fn linear_workflow() -> Workflow {
    workflow_with(
        vec![
            start("s", ""),
            task("t", "Review", "Alice"),
            end("e", "Done"),
        ],
        vec![edge("s", "t"), edge("t", "e")],
    )
}

/// A diamond: the start fans out to two tasks that rejoin at one end node.
///
/// Graph: `s -> a -> e`, `s -> b -> e`
#[allow(dead_code)]
pub fn diamond_workflow() -> Workflow {
    workflow_with(
        vec![
            start("s", "Kickoff"),
            task("a", "Collect Documents", "Alice"),
            task("b", "Order Equipment", "Bob"),
            end("e", "All set"),
        ],
        vec![edge("s", "a"), edge("s", "b"), edge("a", "e"), edge("b", "e")],
    )
}

/// Scratch directory for tests that write files. Each test should use its
/// own subdirectory and clean up after itself.
#[allow(dead_code)]
pub fn test_output_dir() -> std::path::PathBuf {
    std::env::temp_dir().join("nagare-tests")
}

/// A five-kind chain touching every node payload once.
///
/// Graph: `s -> t -> ap -> au -> e`
#[allow(dead_code)]
pub fn full_chain_workflow() -> Workflow {
    workflow_with(
        vec![
            start("s", "New Hire"),
            task("t", "Prepare Contract", "Alice"),
            approval("ap", "Contract Sign-off", ApproverRole::Hrbp),
            automated("au", "Send Welcome Email", "send-email"),
            end("e", "Onboarding complete"),
        ],
        vec![
            edge("s", "t"),
            edge("t", "ap"),
            edge("ap", "au"),
            edge("au", "e"),
        ],
    )
}
