//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from
//! the keiro crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = WorkflowSnapshot::mock().into_workflow()?;
//! let dependencies = generate_dependencies(&workflow);
//! let graph = build_graph(&workflow, &dependencies);
//! let metrics = metrics::compute(&graph);
//!
//! println!("{}", MetricsFormatter::format_metrics(&metrics));
//! # Ok(())
//! # }
//! ```

// Graph assembly
pub use crate::builder::{
    CircleLayout, DependencySpec, GraphBuilder, TaskGridLayout, build_graph,
    generate_dependencies,
};

// Derived metrics
pub use crate::metrics::{self, GraphMetrics, ProjectOverview};

// Graph value types
pub use crate::model::{
    BlockerType, EdgeData, EdgeKind, ExperimentDetails, GraphArtifact, GraphData, GraphEdge,
    GraphMetadata, GraphNode, LayoutKind, MilestoneDetails, NodeKind, NodeMetadata, NodePayload,
    NodeStatus, Position, TaskDetails,
};

// Entity model
pub use crate::workflow::{
    Experiment, ExperimentStatus, IntoWorkflow, RiskLevel, Task, TaskPriority, TaskStatus,
    WorkflowDefinition,
};

// Upstream snapshots
pub use crate::data::WorkflowSnapshot;

// Error types
pub use crate::error::{
    ArtifactError, GraphDefect, SnapshotError, ValidationError, WorkflowConversionError,
};

// Report formatting
pub use crate::report::MetricsFormatter;

// Result type alias for convenience; the error defaults to a boxed trait
// object but can be overridden where a concrete error is wanted.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
