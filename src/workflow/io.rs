use super::definition::Workflow;
use super::node::Node;
use crate::error::WorkflowError;
use itertools::Itertools;
use std::fs;
use std::path::Path;

const CSV_HEADER: &str = "Node ID,Node Type,Title,Details";

impl Workflow {
    /// Parses a workflow from its JSON wire format.
    ///
    /// Parsing is strict about node kinds: any `type` value outside the
    /// five known kinds fails the whole document.
    pub fn from_json(json: &str) -> Result<Self, WorkflowError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the workflow to pretty-printed JSON.
    ///
    /// Feeding the output back through [`Workflow::from_json`] reproduces
    /// an identical document.
    pub fn to_json_pretty(&self) -> Result<String, WorkflowError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a workflow from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WorkflowError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| WorkflowError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Writes the workflow to a JSON file, replacing any existing content.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), WorkflowError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| WorkflowError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Renders the node table of a workflow as CSV.
///
/// Columns are `Node ID,Node Type,Title,Details`. Every cell is quoted;
/// the Details cell holds the node's payload JSON with inner quotes
/// doubled per RFC 4180. Edges are not exported.
pub fn workflow_to_csv(workflow: &Workflow) -> Result<String, WorkflowError> {
    let rows = workflow
        .nodes
        .iter()
        .map(csv_row)
        .collect::<Result<Vec<_>, WorkflowError>>()?;
    let mut csv = std::iter::once(CSV_HEADER.to_string()).chain(rows).join("\n");
    csv.push('\n');
    Ok(csv)
}

fn csv_row(node: &Node) -> Result<String, WorkflowError> {
    let details = node.data.payload_json()?;
    Ok(format!(
        "\"{}\",\"{}\",\"{}\",\"{}\"",
        escape_csv(&node.id),
        node.kind(),
        escape_csv(node.data.title()),
        escape_csv(&details),
    ))
}

fn escape_csv(value: &str) -> String {
    value.replace('"', "\"\"")
}
