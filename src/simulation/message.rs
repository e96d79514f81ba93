use crate::workflow::{Node, NodeData};

/// Renders the trace line for one executed node. Blank fields fall back
/// to neutral placeholders so the line always reads as a sentence.
pub(super) fn step_message(node: &Node) -> String {
    match &node.data {
        NodeData::Start(data) => {
            format!("Workflow started: {}", or_placeholder(&data.title, "Start"))
        }
        NodeData::Task(data) => format!(
            "Task assigned: {}. Assigned to: {}",
            or_placeholder(&data.title, "Task"),
            or_placeholder(&data.assignee, "Unassigned"),
        ),
        NodeData::Approval(data) => format!(
            "Approval required from: {}. Node: {}",
            data.approver_role,
            or_placeholder(&data.title, "Approval"),
        ),
        NodeData::Automated(data) => format!(
            "Executing automation: {}",
            or_placeholder(&data.title, "Automated Action"),
        ),
        NodeData::End(data) => format!(
            "Workflow completed: {}",
            or_placeholder(&data.end_message, "Process finished"),
        ),
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}
