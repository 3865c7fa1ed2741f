use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an experiment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    Active,
    Completed,
    Paused,
    Failed,
}

impl fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentStatus::Active => write!(f, "active"),
            ExperimentStatus::Completed => write!(f, "completed"),
            ExperimentStatus::Paused => write!(f, "paused"),
            ExperimentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Lifecycle state of a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Active,
    Completed,
    Failed,
    Blocked,
}

/// Scheduling priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
            TaskPriority::Critical => write!(f, "critical"),
        }
    }
}

/// Risk assessment of an experiment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// A single development experiment path and its nested tasks.
///
/// Experiments are owned by the upstream data source and passed into the
/// builder as immutable snapshots; the builder never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub id: String,
    pub name: String,
    pub approach: String,
    pub status: ExperimentStatus,
    /// Overall progress percentage in [0, 100].
    pub progress: f64,
    /// Invariant: `tasks_completed <= total_tasks`.
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub test_coverage: f64,
    pub quality_score: f64,
    /// Tasks per day, >= 0.
    pub velocity: f64,
    pub estimated_completion: String,
    pub risk: RiskLevel,
    pub team: String,
    pub branch: String,
    pub last_update: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A concrete unit of work tracked under an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique within the owning experiment.
    pub id: String,
    /// Non-owning reference to `Experiment::id`.
    pub experiment_id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: String,
    pub estimated_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,
    pub progress: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// The canonical, insertion-ordered collection of experiments that feeds
/// the graph builder. This is the target structure for any custom upstream
/// format conversion.
///
/// Iteration order is insertion order. Both the dependency generator and
/// the circular layout derive from it, so two definitions holding the same
/// experiments in a different order produce different graphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub experiments: IndexMap<String, Experiment>,
}

impl WorkflowDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a definition from experiments, keyed by their ids in the
    /// order given.
    pub fn from_experiments(experiments: impl IntoIterator<Item = Experiment>) -> Self {
        Self {
            experiments: experiments
                .into_iter()
                .map(|exp| (exp.id.clone(), exp))
                .collect(),
        }
    }

    /// Inserts an experiment under its own id, appending to the iteration
    /// order (or replacing in place if the id already exists).
    pub fn insert(&mut self, experiment: Experiment) {
        self.experiments.insert(experiment.id.clone(), experiment);
    }

    pub fn get(&self, id: &str) -> Option<&Experiment> {
        self.experiments.get(id)
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}
