use super::edge::GraphEdge;
use super::node::GraphNode;
use crate::error::GraphDefect;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout algorithm hint recorded in graph metadata for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Hierarchical,
    Force,
    Circular,
    Dagre,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Hierarchical => write!(f, "hierarchical"),
            LayoutKind::Force => write!(f, "force"),
            LayoutKind::Circular => write!(f, "circular"),
            LayoutKind::Dagre => write!(f, "dagre"),
        }
    }
}

/// Graph-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    pub project_id: String,
    pub version: String,
    pub last_modified: String,
    pub layout: LayoutKind,
}

/// The assembled graph: nodes in layout order (experiments first, then
/// their synthetic tasks), edges, and metadata.
///
/// A `GraphData` is freshly constructed on every builder call; there is no
/// caching and no identity across calls beyond id equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub metadata: GraphMetadata,
}

impl GraphData {
    /// Looks a node up by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Checks the structural invariants: node ids are unique and every
    /// edge endpoint resolves to a node.
    ///
    /// Graphs assembled by the builder satisfy both by construction, so
    /// this is intended for graphs deserialized from elsewhere. Fails on
    /// the first defect found.
    pub fn validate(&self) -> Result<(), GraphDefect> {
        let mut ids: AHashSet<&str> = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(GraphDefect::DuplicateNodeId {
                    node_id: node.id.clone(),
                });
            }
        }
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphDefect::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
