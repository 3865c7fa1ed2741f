use crate::workflow::{ExperimentStatus, RiskLevel, TaskPriority};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D canvas position assigned by the deterministic layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Discriminant for the payload a graph node carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Experiment,
    Task,
    Milestone,
    Decision,
    Merge,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Experiment => write!(f, "experiment"),
            NodeKind::Task => write!(f, "task"),
            NodeKind::Milestone => write!(f, "milestone"),
            NodeKind::Decision => write!(f, "decision"),
            NodeKind::Merge => write!(f, "merge"),
        }
    }
}

/// Rendering status of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Pending,
    Active,
    Completed,
    Failed,
    Blocked,
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeStatus::Pending => write!(f, "pending"),
            NodeStatus::Active => write!(f, "active"),
            NodeStatus::Completed => write!(f, "completed"),
            NodeStatus::Failed => write!(f, "failed"),
            NodeStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// Maps an experiment's lifecycle state onto a node status. `Paused` has
/// no node-level counterpart and renders as `Pending`.
impl From<ExperimentStatus> for NodeStatus {
    fn from(status: ExperimentStatus) -> Self {
        match status {
            ExperimentStatus::Active => NodeStatus::Active,
            ExperimentStatus::Completed => NodeStatus::Completed,
            ExperimentStatus::Failed => NodeStatus::Failed,
            ExperimentStatus::Paused => NodeStatus::Pending,
        }
    }
}

/// Experiment details carried by an experiment node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentDetails {
    pub approach: String,
    pub progress: f64,
    pub test_coverage: f64,
    pub quality_score: f64,
    pub velocity: f64,
    pub risk: RiskLevel,
    pub team: String,
    pub estimated_completion: String,
}

/// Task details carried by a synthetic or explicit task node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetails {
    pub description: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub estimated_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blockers: Vec<String>,
}

/// Milestone details. The canonical builder never constructs these; they
/// exist for graphs converted from external workflow formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDetails {
    pub deliverable: String,
    pub acceptance_criteria: Vec<String>,
    pub stakeholders: Vec<String>,
    pub review_date: String,
}

/// The variant payload of a node, keyed by the node's kind.
///
/// Exactly one variant exists per node, so consumers match on the payload
/// instead of null-checking unrelated optional fields. The discriminant is
/// not stored separately; `kind()` derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePayload {
    Experiment(ExperimentDetails),
    Task(TaskDetails),
    Milestone(MilestoneDetails),
    Decision,
    Merge,
}

impl NodePayload {
    /// The kind discriminant matching this payload.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::Experiment(_) => NodeKind::Experiment,
            NodePayload::Task(_) => NodeKind::Task,
            NodePayload::Milestone(_) => NodeKind::Milestone,
            NodePayload::Decision => NodeKind::Decision,
            NodePayload::Merge => NodeKind::Merge,
        }
    }
}

/// Provenance and labeling attached to every node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    pub created_at: String,
    pub last_updated: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single node in the assembled graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Unique across the whole graph.
    pub id: String,
    pub label: String,
    pub status: NodeStatus,
    pub position: Position,
    #[serde(rename = "data")]
    pub payload: NodePayload,
    pub metadata: NodeMetadata,
}

impl GraphNode {
    /// The kind of this node, derived from its payload.
    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }
}
