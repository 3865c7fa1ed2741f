use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an edge in the workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Dependency,
    Parallel,
    Conditional,
    Merge,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Dependency => write!(f, "dependency"),
            EdgeKind::Parallel => write!(f, "parallel"),
            EdgeKind::Conditional => write!(f, "conditional"),
            EdgeKind::Merge => write!(f, "merge"),
        }
    }
}

/// How strongly a dependency blocks its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockerType {
    Hard,
    Soft,
}

/// Auxiliary payload describing an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub blocker_type: BlockerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_transition_time: Option<f64>,
}

impl EdgeData {
    /// Unit-weight payload for a soft inter-experiment dependency.
    pub fn soft() -> Self {
        Self {
            condition: None,
            weight: Some(1.0),
            blocker_type: BlockerType::Soft,
            estimated_transition_time: None,
        }
    }

    /// Unit-weight payload for a hard parent-to-task link.
    pub fn hard() -> Self {
        Self {
            condition: None,
            weight: Some(1.0),
            blocker_type: BlockerType::Hard,
            estimated_transition_time: None,
        }
    }
}

/// A directed connection between two nodes of the same graph.
///
/// Invariant: `source` and `target` both resolve to node ids present in
/// the owning `GraphData`. The builder guarantees this by construction;
/// `GraphData::validate` checks it for graphs from other origins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    /// Unique, by convention `"<source>-<target>"` or
    /// `"<source>-to-<target>"`.
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub data: EdgeData,
}
