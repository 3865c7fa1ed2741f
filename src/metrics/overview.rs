use crate::workflow::{ExperimentStatus, WorkflowDefinition};
use serde::{Deserialize, Serialize};

/// Headline numbers for the project summary panel, derived straight from
/// the workflow definition rather than the assembled graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub total_experiments: usize,
    pub active_experiments: usize,
    pub completed_experiments: usize,
    /// Mean tasks-per-day velocity across experiments; 0 with none.
    pub average_velocity: f64,
    /// Mean progress percentage across experiments; 0 with none.
    pub overall_progress: f64,
}

impl ProjectOverview {
    pub fn from_workflow(workflow: &WorkflowDefinition) -> Self {
        let total = workflow.len();
        let mut active = 0usize;
        let mut completed = 0usize;
        let mut velocity_sum = 0.0;
        let mut progress_sum = 0.0;
        for exp in workflow.experiments.values() {
            match exp.status {
                ExperimentStatus::Active => active += 1,
                ExperimentStatus::Completed => completed += 1,
                _ => {}
            }
            velocity_sum += exp.velocity;
            progress_sum += exp.progress;
        }
        let (average_velocity, overall_progress) = if total == 0 {
            (0.0, 0.0)
        } else {
            (velocity_sum / total as f64, progress_sum / total as f64)
        };
        Self {
            total_experiments: total,
            active_experiments: active,
            completed_experiments: completed,
            average_velocity,
            overall_progress,
        }
    }
}
