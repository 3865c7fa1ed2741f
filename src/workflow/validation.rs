//! Boundary validation of the entity model.
//!
//! The graph builder and the metrics calculator are total functions and do
//! not validate their input. Out-of-range numbers flow through them
//! unchanged, so callers accepting data from an untrusted upstream source
//! should run these checks at the boundary instead.

use super::definition::{Experiment, Task, WorkflowDefinition};
use crate::error::ValidationError;

fn check_percentage(
    experiment_id: &str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::PercentageOutOfRange {
            experiment_id: experiment_id.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

impl Experiment {
    /// Checks the data-model invariants of this experiment and its tasks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tasks_completed > self.total_tasks {
            return Err(ValidationError::TaskCountMismatch {
                experiment_id: self.id.clone(),
                completed: self.tasks_completed,
                total: self.total_tasks,
            });
        }
        check_percentage(&self.id, "progress", self.progress)?;
        check_percentage(&self.id, "testCoverage", self.test_coverage)?;
        check_percentage(&self.id, "qualityScore", self.quality_score)?;
        if self.velocity < 0.0 {
            return Err(ValidationError::NegativeVelocity {
                experiment_id: self.id.clone(),
                value: self.velocity,
            });
        }
        for task in &self.tasks {
            if task.experiment_id != self.id {
                return Err(ValidationError::ForeignTaskReference {
                    task_id: task.id.clone(),
                    experiment_id: self.id.clone(),
                    referenced: task.experiment_id.clone(),
                });
            }
            task.validate()?;
        }
        Ok(())
    }
}

impl Task {
    /// Checks the numeric invariants of this task.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=100.0).contains(&self.progress) {
            return Err(ValidationError::TaskPercentageOutOfRange {
                task_id: self.id.clone(),
                field: "progress",
                value: self.progress,
            });
        }
        if self.estimated_hours < 0.0 {
            return Err(ValidationError::NegativeHours {
                task_id: self.id.clone(),
                field: "estimatedHours",
                value: self.estimated_hours,
            });
        }
        if let Some(actual) = self.actual_hours {
            if actual < 0.0 {
                return Err(ValidationError::NegativeHours {
                    task_id: self.id.clone(),
                    field: "actualHours",
                    value: actual,
                });
            }
        }
        Ok(())
    }
}

impl WorkflowDefinition {
    /// Validates every experiment in the definition, failing on the first
    /// violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for experiment in self.experiments.values() {
            experiment.validate()?;
        }
        Ok(())
    }
}
