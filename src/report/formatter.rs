use crate::metrics::{GraphMetrics, ProjectOverview};
use itertools::Itertools;
use std::fmt::Write;

/// Formats derived metrics into human-readable summaries.
pub struct MetricsFormatter;

impl MetricsFormatter {
    /// Multi-line summary of a metrics set, suitable for terminal output.
    ///
    /// Tally breakdowns are sorted by key name so the output is stable
    /// across runs regardless of hash order.
    pub fn format_metrics(metrics: &GraphMetrics) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Nodes: {} ({})",
            metrics.total_nodes,
            Self::format_tally(
                metrics
                    .nodes_by_status
                    .iter()
                    .map(|(status, count)| (status.to_string(), *count))
            )
        );
        let _ = writeln!(
            out,
            "Edges: {} ({})",
            metrics.total_edges,
            Self::format_tally(
                metrics
                    .edges_by_kind
                    .iter()
                    .map(|(kind, count)| (kind.to_string(), *count))
            )
        );
        let _ = writeln!(
            out,
            "Completion rate: {:.1}%",
            metrics.completion_rate * 100.0
        );
        let _ = writeln!(out, "Critical path length: {}", metrics.critical_path_length);
        let _ = write!(out, "Estimated completion: {}", metrics.estimated_completion);
        out
    }

    /// One-line-per-figure summary of a project overview.
    pub fn format_overview(overview: &ProjectOverview) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Experiments: {} total, {} active, {} completed",
            overview.total_experiments,
            overview.active_experiments,
            overview.completed_experiments
        );
        let _ = writeln!(
            out,
            "Average velocity: {:.2} tasks/day",
            overview.average_velocity
        );
        let _ = write!(out, "Overall progress: {:.1}%", overview.overall_progress);
        out
    }

    fn format_tally(entries: impl Iterator<Item = (String, usize)>) -> String {
        let parts: Vec<String> = entries
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .map(|(name, count)| format!("{name}: {count}"))
            .collect();
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}
