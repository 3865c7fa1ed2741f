use thiserror::Error;

/// Errors that can occur while loading a workflow snapshot from disk.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Violations of the entity-model invariants, reported by boundary
/// validation. The pure graph transforms never raise these; callers that
/// accept untrusted upstream data are expected to validate first.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Experiment '{experiment_id}' reports {completed} completed tasks out of {total}")]
    TaskCountMismatch {
        experiment_id: String,
        completed: u32,
        total: u32,
    },

    #[error("Experiment '{experiment_id}' has {field} = {value}, outside the range [0, 100]")]
    PercentageOutOfRange {
        experiment_id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Experiment '{experiment_id}' has a negative velocity ({value})")]
    NegativeVelocity { experiment_id: String, value: f64 },

    #[error(
        "Task '{task_id}' is listed under experiment '{experiment_id}' but references '{referenced}'"
    )]
    ForeignTaskReference {
        task_id: String,
        experiment_id: String,
        referenced: String,
    },

    #[error("Task '{task_id}' has {field} = {value}, outside the range [0, 100]")]
    TaskPercentageOutOfRange {
        task_id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Task '{task_id}' has negative {field} ({value})")]
    NegativeHours {
        task_id: String,
        field: &'static str,
        value: f64,
    },
}

/// Errors that can occur when converting a custom upstream format into a
/// keiro `WorkflowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid upstream data: {0}")]
    ValidationError(String),
}

/// Structural defects in an assembled `GraphData`.
///
/// Graphs produced by the builder satisfy both invariants by construction;
/// this taxonomy exists for graphs that arrive from outside it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphDefect {
    #[error("Edge '{edge_id}' references node '{node_id}', which is not present in the graph")]
    DanglingEdge { edge_id: String, node_id: String },

    #[error("Node id '{node_id}' appears more than once in the graph")]
    DuplicateNodeId { node_id: String },
}

/// Errors around saving and loading graph artifacts.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),

    #[error("Could not access artifact file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
