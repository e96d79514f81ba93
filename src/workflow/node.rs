use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canvas coordinates of a node. Presentation data only; validation and
/// simulation never consult it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The five node kinds a workflow graph is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Task,
    Approval,
    Automated,
    End,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Start => "start",
            NodeKind::Task => "task",
            NodeKind::Approval => "approval",
            NodeKind::Automated => "automated",
            NodeKind::End => "end",
        };
        write!(f, "{}", name)
    }
}

/// Who signs off on an approval step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApproverRole {
    #[default]
    Manager,
    #[serde(rename = "HRBP")]
    Hrbp,
    Director,
    #[serde(rename = "CEO")]
    Ceo,
}

impl fmt::Display for ApproverRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApproverRole::Manager => "Manager",
            ApproverRole::Hrbp => "HRBP",
            ApproverRole::Director => "Director",
            ApproverRole::Ceo => "CEO",
        };
        write!(f, "{}", name)
    }
}

/// A free-form key/value pair attached to a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub key: String,
    pub value: String,
}

/// Payload of a start node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartData {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Payload of a manual task node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    /// Expected `YYYY-MM-DD`; checked by payload validation, not by serde.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

/// Payload of an approval node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub approver_role: ApproverRole,
    /// Amounts at or under this threshold skip the manual sign-off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_approve_threshold: Option<f64>,
}

/// Payload of an automated step node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatedData {
    #[serde(default)]
    pub title: String,
    /// Points into the action catalog; the id is not cross-checked here.
    #[serde(default)]
    pub action_id: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub action_params: BTreeMap<String, String>,
}

/// Payload of an end node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndData {
    #[serde(default)]
    pub end_message: String,
    #[serde(default)]
    pub summary_flag: bool,
}

/// Kind-specific payload of a node.
///
/// On the wire this is the adjacent `type`/`data` pair of the node object;
/// an unrecognized `type` string fails parsing outright rather than being
/// coerced to some fallback kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeData {
    Start(StartData),
    Task(TaskData),
    Approval(ApprovalData),
    Automated(AutomatedData),
    End(EndData),
}

impl NodeData {
    /// The discriminant of this payload.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Start(_) => NodeKind::Start,
            NodeData::Task(_) => NodeKind::Task,
            NodeData::Approval(_) => NodeKind::Approval,
            NodeData::Automated(_) => NodeKind::Automated,
            NodeData::End(_) => NodeKind::End,
        }
    }

    /// The payload title. End nodes carry a message instead of a title,
    /// so they report an empty string here.
    pub fn title(&self) -> &str {
        match self {
            NodeData::Start(data) => &data.title,
            NodeData::Task(data) => &data.title,
            NodeData::Approval(data) => &data.title,
            NodeData::Automated(data) => &data.title,
            NodeData::End(_) => "",
        }
    }

    /// The editor defaults for a freshly placed node of the given kind.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Start => NodeData::Start(StartData {
                title: "Start Process".to_string(),
                ..StartData::default()
            }),
            NodeKind::Task => NodeData::Task(TaskData {
                title: "New Task".to_string(),
                ..TaskData::default()
            }),
            NodeKind::Approval => NodeData::Approval(ApprovalData {
                title: "Approval Step".to_string(),
                auto_approve_threshold: Some(0.0),
                ..ApprovalData::default()
            }),
            NodeKind::Automated => NodeData::Automated(AutomatedData {
                title: "Automated Step".to_string(),
                ..AutomatedData::default()
            }),
            NodeKind::End => NodeData::End(EndData {
                end_message: "Process Complete".to_string(),
                ..EndData::default()
            }),
        }
    }

    /// Serializes just the payload object, without the `type` tag wrapper.
    pub fn payload_json(&self) -> Result<String, serde_json::Error> {
        match self {
            NodeData::Start(data) => serde_json::to_string(data),
            NodeData::Task(data) => serde_json::to_string(data),
            NodeData::Approval(data) => serde_json::to_string(data),
            NodeData::Automated(data) => serde_json::to_string(data),
            NodeData::End(data) => serde_json::to_string(data),
        }
    }
}

/// A single placed node in a workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, data: NodeData, position: Position) -> Self {
        Self {
            id: id.into(),
            data,
            position,
        }
    }

    /// Shorthand for the payload's discriminant.
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}
