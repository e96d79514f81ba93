use serde::{Deserialize, Serialize};

/// A directed connection between two nodes.
///
/// An edge's identity is its ordered `(source, target)` pair; the id is
/// derived from that pair when the edge is created and only carried for
/// callers that address edges by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    /// Creates the canonical edge for an ordered endpoint pair.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{}-{}", source, target),
            source,
            target,
        }
    }

    /// Whether this edge connects exactly the given ordered pair.
    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }
}
