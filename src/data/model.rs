use crate::error::{SnapshotError, WorkflowConversionError};
use crate::workflow::{
    Experiment, ExperimentStatus, IntoWorkflow, RiskLevel, WorkflowDefinition,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// An upstream snapshot of workflow state, matching the JSON the
/// dashboard's data source emits on every refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub experiments: IndexMap<String, Experiment>,
}

impl WorkflowSnapshot {
    /// Loads a snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Creates the default mock snapshot used when no upstream source is
    /// wired in: three competing experiment paths at different stages.
    pub fn mock() -> Self {
        let experiments = [
            Experiment {
                id: "exp-001".to_string(),
                name: "React Component Approach".to_string(),
                approach: "Component-based architecture with hooks".to_string(),
                status: ExperimentStatus::Active,
                progress: 75.0,
                tasks_completed: 15,
                total_tasks: 20,
                test_coverage: 92.0,
                quality_score: 88.0,
                velocity: 2.3,
                estimated_completion: "2024-01-15".to_string(),
                risk: RiskLevel::Low,
                team: "Frontend Team A".to_string(),
                branch: "feature/react-components".to_string(),
                last_update: "2 hours ago".to_string(),
                tasks: vec![],
            },
            Experiment {
                id: "exp-002".to_string(),
                name: "Micro-service Approach".to_string(),
                approach: "Distributed services with GraphQL".to_string(),
                status: ExperimentStatus::Active,
                progress: 60.0,
                tasks_completed: 12,
                total_tasks: 20,
                test_coverage: 85.0,
                quality_score: 82.0,
                velocity: 1.8,
                estimated_completion: "2024-01-18".to_string(),
                risk: RiskLevel::Medium,
                team: "Backend Team B".to_string(),
                branch: "feature/microservices".to_string(),
                last_update: "4 hours ago".to_string(),
                tasks: vec![],
            },
            Experiment {
                id: "exp-003".to_string(),
                name: "Monolithic Approach".to_string(),
                approach: "Traditional MVC with enhanced performance".to_string(),
                status: ExperimentStatus::Active,
                progress: 45.0,
                tasks_completed: 9,
                total_tasks: 20,
                test_coverage: 78.0,
                quality_score: 79.0,
                velocity: 1.5,
                estimated_completion: "2024-01-22".to_string(),
                risk: RiskLevel::High,
                team: "Full-stack Team C".to_string(),
                branch: "feature/monolithic".to_string(),
                last_update: "1 hour ago".to_string(),
                tasks: vec![],
            },
        ];
        Self {
            experiments: experiments
                .into_iter()
                .map(|exp| (exp.id.clone(), exp))
                .collect(),
        }
    }
}

/// The snapshot format is already shaped like the canonical definition,
/// so the conversion is a move of the experiment mapping.
impl IntoWorkflow for WorkflowSnapshot {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        Ok(WorkflowDefinition {
            experiments: self.experiments,
        })
    }
}
