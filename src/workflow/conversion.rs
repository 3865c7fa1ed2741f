use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a keiro
/// `WorkflowDefinition`.
///
/// This is the primary extension point for making keiro source-agnostic.
/// By implementing this trait on your own structs, you provide a
/// translation layer that lets the graph builder consume whatever format
/// your project-tracking backend emits.
///
/// # Example
///
/// ```rust
/// use keiro::prelude::*;
/// use keiro::error::WorkflowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct TrackerItem { key: String, title: String, done: u32, planned: u32 }
/// struct TrackerExport { items: Vec<TrackerItem> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for TrackerExport {
///     fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
///         let mut workflow = WorkflowDefinition::new();
///         for item in self.items {
///             if item.done > item.planned {
///                 return Err(WorkflowConversionError::ValidationError(format!(
///                     "item '{}' reports more done than planned",
///                     item.key
///                 )));
///             }
///             workflow.insert(Experiment {
///                 id: item.key,
///                 name: item.title,
///                 approach: String::new(),
///                 status: ExperimentStatus::Active,
///                 progress: 0.0,
///                 tasks_completed: item.done,
///                 total_tasks: item.planned,
///                 test_coverage: 0.0,
///                 quality_score: 0.0,
///                 velocity: 0.0,
///                 estimated_completion: String::new(),
///                 risk: RiskLevel::Medium,
///                 team: String::new(),
///                 branch: String::new(),
///                 last_update: String::new(),
///                 tasks: vec![],
///             });
///         }
///         Ok(workflow)
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a keiro-compatible
    /// workflow definition.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}
