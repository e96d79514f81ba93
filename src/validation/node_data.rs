use crate::workflow::NodeData;
use chrono::NaiveDate;

/// Checks one node payload's required fields.
///
/// Returns the editor's canonical messages; an empty result means the
/// payload is complete. Graph structure is out of scope here, that is
/// [`validate`](super::validate)'s job.
pub fn validate_node_data(data: &NodeData) -> Vec<String> {
    let mut errors = Vec::new();
    match data {
        NodeData::Start(data) => {
            if data.title.trim().is_empty() {
                errors.push("Start node title is required".to_string());
            }
        }
        NodeData::Task(data) => {
            if data.title.trim().is_empty() {
                errors.push("Task title is required".to_string());
            }
            if let Some(due_date) = &data.due_date {
                if !due_date.is_empty() && !is_iso_date(due_date) {
                    errors.push("Invalid due date format".to_string());
                }
            }
        }
        NodeData::Approval(data) => {
            if data.title.trim().is_empty() {
                errors.push("Approval node title is required".to_string());
            }
        }
        NodeData::Automated(data) => {
            if data.title.trim().is_empty() {
                errors.push("Automated step title is required".to_string());
            }
            if data.action_id.is_empty() {
                errors.push("Action is required".to_string());
            }
        }
        NodeData::End(data) => {
            if data.end_message.trim().is_empty() {
                errors.push("End message is required".to_string());
            }
        }
    }
    errors
}

/// Strict `YYYY-MM-DD`, real calendar dates only.
fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
