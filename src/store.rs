//! An owned state container for one workflow document under edit.
//!
//! [`WorkflowStore`] serializes every mutation a canvas editor performs:
//! node placement, payload edits, connections, undo/redo, and a shelf of
//! saved documents. Engine calls stay pure; they only ever see `&Workflow`
//! snapshots handed out by [`WorkflowStore::current`].

use crate::error::StoreError;
use crate::validation::validate_node_data;
use crate::workflow::{Edge, Node, NodeData, NodeKind, Position, Workflow};
use uuid::Uuid;

/// Handle returned by [`WorkflowStore::subscribe`], used to detach the
/// listener again.
pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(&Workflow)>;

pub struct WorkflowStore {
    workflow: Workflow,
    saved: Vec<Workflow>,
    past: Vec<Workflow>,
    future: Vec<Workflow>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl WorkflowStore {
    /// Creates a store around a fresh, empty workflow.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_workflow(Workflow::new(name))
    }

    /// Wraps an existing workflow document.
    pub fn from_workflow(workflow: Workflow) -> Self {
        Self {
            workflow,
            saved: Vec::new(),
            past: Vec::new(),
            future: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current document snapshot.
    pub fn current(&self) -> &Workflow {
        &self.workflow
    }

    /// Consumes the store, releasing the current document.
    pub fn take(self) -> Workflow {
        self.workflow
    }

    /// Places a new node with the kind's default payload and returns its
    /// generated id.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> String {
        self.checkpoint();
        let node = Node::new(
            Uuid::new_v4().to_string(),
            NodeData::default_for(kind),
            position,
        );
        let node_id = node.id.clone();
        self.workflow.nodes.push(node);
        self.commit();
        tracing::debug!(node_id = %node_id, kind = %kind, "Node added");
        node_id
    }

    /// Replaces a node's payload. The payload must pass
    /// [`validate_node_data`]; nothing changes when it does not.
    pub fn update_node_data(&mut self, node_id: &str, data: NodeData) -> Result<(), StoreError> {
        let errors = validate_node_data(&data);
        if !errors.is_empty() {
            return Err(StoreError::InvalidNodeData(errors.join(", ")));
        }
        let index = self.node_index(node_id)?;
        self.checkpoint();
        self.workflow.nodes[index].data = data;
        self.commit();
        Ok(())
    }

    /// Moves a node on the canvas.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), StoreError> {
        let index = self.node_index(node_id)?;
        self.checkpoint();
        self.workflow.nodes[index].position = position;
        self.commit();
        Ok(())
    }

    /// Deletes a node together with every edge touching it.
    pub fn remove_node(&mut self, node_id: &str) -> Result<(), StoreError> {
        let index = self.node_index(node_id)?;
        self.checkpoint();
        self.workflow.nodes.remove(index);
        self.workflow
            .edges
            .retain(|edge| edge.source != node_id && edge.target != node_id);
        self.commit();
        tracing::debug!(node_id = %node_id, "Node removed");
        Ok(())
    }

    /// Connects two existing nodes and returns the new edge's id.
    ///
    /// Self-loops and duplicates of an existing `(source, target)` pair
    /// are rejected here; they can only enter a document through raw
    /// JSON, where validation picks them up instead.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<String, StoreError> {
        if source == target {
            return Err(StoreError::SelfLoop {
                node_id: source.to_string(),
            });
        }
        for endpoint in [source, target] {
            if self.workflow.node(endpoint).is_none() {
                return Err(StoreError::NodeNotFound {
                    node_id: endpoint.to_string(),
                });
            }
        }
        if self.workflow.edge_between(source, target).is_some() {
            return Err(StoreError::DuplicateEdge {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
        self.checkpoint();
        let edge = Edge::between(source, target);
        let edge_id = edge.id.clone();
        self.workflow.edges.push(edge);
        self.commit();
        tracing::debug!(edge_id = %edge_id, "Edge added");
        Ok(edge_id)
    }

    /// Deletes an edge by id.
    pub fn remove_edge(&mut self, edge_id: &str) -> Result<(), StoreError> {
        let index = self
            .workflow
            .edges
            .iter()
            .position(|edge| edge.id == edge_id)
            .ok_or_else(|| StoreError::EdgeNotFound {
                edge_id: edge_id.to_string(),
            })?;
        self.checkpoint();
        self.workflow.edges.remove(index);
        self.commit();
        Ok(())
    }

    /// Renames the document.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.checkpoint();
        self.workflow.name = name.into();
        self.commit();
    }

    /// Removes every node and edge, keeping the document identity.
    pub fn clear(&mut self) {
        self.checkpoint();
        self.workflow.nodes.clear();
        self.workflow.edges.clear();
        self.commit();
    }

    /// Steps the document back one mutation. Returns `false` when already
    /// at the oldest state.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.future
            .push(std::mem::replace(&mut self.workflow, previous));
        self.notify();
        true
    }

    /// Re-applies the most recently undone mutation. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        self.past
            .push(std::mem::replace(&mut self.workflow, next));
        self.notify();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Snapshots the current document onto the saved shelf, replacing any
    /// earlier save with the same id, and returns the document id.
    pub fn save(&mut self) -> String {
        self.workflow.touch();
        let snapshot = self.workflow.clone();
        let workflow_id = snapshot.id.clone();
        match self.saved.iter_mut().find(|saved| saved.id == workflow_id) {
            Some(existing) => *existing = snapshot,
            None => self.saved.push(snapshot),
        }
        self.notify();
        tracing::debug!(workflow_id = %workflow_id, "Workflow saved");
        workflow_id
    }

    /// Replaces the current document with a saved one. The replaced
    /// document stays reachable through undo.
    pub fn load_saved(&mut self, workflow_id: &str) -> Result<(), StoreError> {
        let found = self
            .saved
            .iter()
            .find(|saved| saved.id == workflow_id)
            .cloned()
            .ok_or_else(|| StoreError::WorkflowNotFound {
                workflow_id: workflow_id.to_string(),
            })?;
        self.checkpoint();
        self.workflow = found;
        self.notify();
        Ok(())
    }

    /// Drops a workflow from the saved shelf. When the loaded document is
    /// the one being deleted, the canvas is cleared as well.
    pub fn delete_saved(&mut self, workflow_id: &str) -> Result<(), StoreError> {
        let index = self
            .saved
            .iter()
            .position(|saved| saved.id == workflow_id)
            .ok_or_else(|| StoreError::WorkflowNotFound {
                workflow_id: workflow_id.to_string(),
            })?;
        self.saved.remove(index);
        if self.workflow.id == workflow_id {
            self.clear();
        }
        Ok(())
    }

    /// The saved-workflow shelf, oldest save first.
    pub fn saved(&self) -> &[Workflow] {
        &self.saved
    }

    /// Registers a callback invoked after every committed change to the
    /// current document.
    pub fn subscribe(&mut self, listener: impl Fn(&Workflow) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Detaches a listener. Returns `false` for ids that are not (or no
    /// longer) registered.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() < before
    }

    fn node_index(&self, node_id: &str) -> Result<usize, StoreError> {
        self.workflow
            .nodes
            .iter()
            .position(|node| node.id == node_id)
            .ok_or_else(|| StoreError::NodeNotFound {
                node_id: node_id.to_string(),
            })
    }

    /// Pushes the pre-mutation state onto the undo stack. Any mutation
    /// invalidates the redo stack.
    fn checkpoint(&mut self) {
        self.past.push(self.workflow.clone());
        self.future.clear();
    }

    fn commit(&mut self) {
        self.workflow.touch();
        self.notify();
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.workflow);
        }
    }
}
