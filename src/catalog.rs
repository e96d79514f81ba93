//! Built-in automation actions and workflow template descriptors.
//!
//! Reference data for editors: the `actionId` of an automated node points
//! into this catalog. The engine itself never cross-checks a node's
//! `actionParams` against the declared parameter names; the catalog
//! exists so UIs can offer pickers and labels.

use serde::Serialize;

/// One automation the platform can run for an automated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Parameter names the action expects, in display order.
    pub params: &'static [&'static str],
}

/// Metadata for a ready-made workflow a user can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const AUTOMATION_ACTIONS: [ActionDescriptor; 8] = [
    ActionDescriptor {
        id: "send-email",
        label: "Send Email",
        description: "Send an email notification",
        params: &["to", "subject", "body"],
    },
    ActionDescriptor {
        id: "generate-doc",
        label: "Generate Document",
        description: "Generate a PDF or document",
        params: &["template", "recipient", "format"],
    },
    ActionDescriptor {
        id: "create-account",
        label: "Create User Account",
        description: "Create a new user account in the system",
        params: &["firstName", "lastName", "email", "department"],
    },
    ActionDescriptor {
        id: "assign-task",
        label: "Assign Task",
        description: "Assign a task to a team member",
        params: &["assignee", "taskName", "priority", "dueDate"],
    },
    ActionDescriptor {
        id: "send-sms",
        label: "Send SMS",
        description: "Send an SMS notification",
        params: &["phoneNumber", "message"],
    },
    ActionDescriptor {
        id: "update-database",
        label: "Update Database",
        description: "Update records in the database",
        params: &["table", "recordId", "updates"],
    },
    ActionDescriptor {
        id: "create-meeting",
        label: "Create Meeting",
        description: "Schedule a calendar meeting",
        params: &["organizer", "attendees", "date", "time", "subject"],
    },
    ActionDescriptor {
        id: "log-audit",
        label: "Log Audit Trail",
        description: "Log an entry to audit trail",
        params: &["action", "userId", "details"],
    },
];

const WORKFLOW_TEMPLATES: [TemplateDescriptor; 3] = [
    TemplateDescriptor {
        id: "onboarding",
        name: "Employee Onboarding",
        description: "Complete workflow for new employee onboarding",
    },
    TemplateDescriptor {
        id: "leave-approval",
        name: "Leave Approval",
        description: "Leave request and approval workflow",
    },
    TemplateDescriptor {
        id: "document-verification",
        name: "Document Verification",
        description: "Document upload and verification process",
    },
];

/// Every automation the catalog offers, in display order.
pub fn actions() -> &'static [ActionDescriptor] {
    &AUTOMATION_ACTIONS
}

/// Looks up an automation by id.
pub fn action(action_id: &str) -> Option<&'static ActionDescriptor> {
    AUTOMATION_ACTIONS.iter().find(|action| action.id == action_id)
}

/// Every template descriptor, in display order.
pub fn templates() -> &'static [TemplateDescriptor] {
    &WORKFLOW_TEMPLATES
}

/// Looks up a template descriptor by id.
pub fn template(template_id: &str) -> Option<&'static TemplateDescriptor> {
    WORKFLOW_TEMPLATES
        .iter()
        .find(|template| template.id == template_id)
}
