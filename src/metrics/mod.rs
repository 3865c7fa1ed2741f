//! Derived statistics over assembled graphs.
//!
//! Metrics are stateless: every call recomputes from the `GraphData` it
//! is handed and keeps no reference to it afterwards.

mod overview;

pub use overview::ProjectOverview;

use crate::model::{EdgeKind, GraphData, NodeKind, NodePayload, NodeStatus};
use ahash::AHashMap;
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate statistics computed from a single `GraphData` instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetrics {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Frequency of each node status. Statuses that never occur are
    /// absent rather than zero-filled.
    pub nodes_by_status: AHashMap<NodeStatus, usize>,
    /// Frequency of each edge kind, with the same absence convention.
    pub edges_by_kind: AHashMap<EdgeKind, usize>,
    /// Fraction of nodes in `completed` status, in [0, 1]. An empty
    /// graph has a completion rate of 0.
    pub completion_rate: f64,
    pub critical_path_length: usize,
    /// ISO calendar date (date portion only).
    pub estimated_completion: String,
}

/// Computes the full metrics set for a graph, dating the completion
/// estimate from today.
pub fn compute(graph: &GraphData) -> GraphMetrics {
    compute_from(graph, Utc::now().date_naive())
}

/// Computes metrics with an explicit reference date for the completion
/// estimate. Useful wherever the result must be reproducible.
pub fn compute_from(graph: &GraphData, today: NaiveDate) -> GraphMetrics {
    let mut nodes_by_status: AHashMap<NodeStatus, usize> = AHashMap::new();
    for node in &graph.nodes {
        *nodes_by_status.entry(node.status).or_insert(0) += 1;
    }

    let mut edges_by_kind: AHashMap<EdgeKind, usize> = AHashMap::new();
    for edge in &graph.edges {
        *edges_by_kind.entry(edge.kind).or_insert(0) += 1;
    }

    let completed = nodes_by_status
        .get(&NodeStatus::Completed)
        .copied()
        .unwrap_or(0);
    let completion_rate = if graph.nodes.is_empty() {
        0.0
    } else {
        completed as f64 / graph.nodes.len() as f64
    };

    let metrics = GraphMetrics {
        total_nodes: graph.nodes.len(),
        total_edges: graph.edges.len(),
        nodes_by_status,
        edges_by_kind,
        completion_rate,
        critical_path_length: critical_path(graph).len(),
        estimated_completion: estimated_completion(graph, today)
            .format("%Y-%m-%d")
            .to_string(),
    };

    tracing::debug!(
        total_nodes = metrics.total_nodes,
        total_edges = metrics.total_edges,
        "computed graph metrics"
    );

    metrics
}

/// The ids of the nodes on the critical path, in node order.
///
/// Deliberately simplified: the path is the ordered list of experiment
/// nodes, not a longest-path search over dependency edges. Swapping in a
/// real search is a scope decision left to the consumer.
pub fn critical_path(graph: &GraphData) -> Vec<String> {
    graph
        .nodes
        .iter()
        .filter(|n| n.kind() == NodeKind::Experiment)
        .map(|n| n.id.clone())
        .collect()
}

/// Projects a completion date from the mean progress of the experiment
/// nodes: one remaining day per ten points of missing progress, rounded
/// up. A graph with no experiment nodes estimates completion today.
fn estimated_completion(graph: &GraphData, today: NaiveDate) -> NaiveDate {
    let mut sum = 0.0;
    let mut count = 0usize;
    for node in &graph.nodes {
        if let NodePayload::Experiment(details) = &node.payload {
            sum += details.progress;
            count += 1;
        }
    }
    if count == 0 {
        return today;
    }
    let average = sum / count as f64;
    let remaining_days = ((100.0 - average) / 10.0).ceil().max(0.0) as u64;
    today.checked_add_days(Days::new(remaining_days)).unwrap_or(today)
}
