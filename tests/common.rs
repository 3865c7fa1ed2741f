//! Common test utilities for building workflow definitions and snapshots.
use keiro::prelude::*;

/// Creates an experiment with the given id, task counts and status; the
/// remaining fields carry neutral defaults the tests do not depend on.
#[allow(dead_code)]
pub fn experiment(
    id: &str,
    status: ExperimentStatus,
    total_tasks: u32,
    tasks_completed: u32,
    progress: f64,
) -> Experiment {
    Experiment {
        id: id.to_string(),
        name: format!("Experiment {}", id),
        approach: "Test approach".to_string(),
        status,
        progress,
        tasks_completed,
        total_tasks,
        test_coverage: 80.0,
        quality_score: 85.0,
        velocity: 2.0,
        estimated_completion: "2024-02-01".to_string(),
        risk: RiskLevel::Low,
        team: "Team Alpha".to_string(),
        branch: format!("feature/{}", id),
        last_update: "1 hour ago".to_string(),
        tasks: vec![],
    }
}

/// A single active experiment with two tasks, one completed.
///
/// Produces 1 experiment node + 2 task nodes and 2 task edges.
#[allow(dead_code)]
pub fn single_experiment_workflow() -> WorkflowDefinition {
    WorkflowDefinition::from_experiments([experiment("e1", ExperimentStatus::Active, 2, 1, 50.0)])
}

/// Three experiments without tasks: two completed, one active.
#[allow(dead_code)]
pub fn three_experiment_workflow() -> WorkflowDefinition {
    WorkflowDefinition::from_experiments([
        experiment("exp-001", ExperimentStatus::Completed, 0, 0, 100.0),
        experiment("exp-002", ExperimentStatus::Completed, 0, 0, 100.0),
        experiment("exp-003", ExperimentStatus::Active, 0, 0, 40.0),
    ])
}

/// Four experiments with varying task loads, for counting tests.
#[allow(dead_code)]
pub fn four_experiment_workflow() -> WorkflowDefinition {
    WorkflowDefinition::from_experiments([
        experiment("a", ExperimentStatus::Active, 5, 2, 40.0),
        experiment("b", ExperimentStatus::Paused, 0, 0, 0.0),
        experiment("c", ExperimentStatus::Completed, 8, 8, 100.0),
        experiment("d", ExperimentStatus::Failed, 3, 1, 30.0),
    ])
}
