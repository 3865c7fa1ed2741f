//! Deterministic position assignment.
//!
//! Experiments sit evenly spaced on a circle; their synthetic tasks hang
//! in per-experiment grid columns beneath it. Both layouts are pure
//! functions of index and count, so a given ordering always reproduces
//! the same canvas.

use crate::model::Position;
use std::f64::consts::PI;

/// Geometry of the circular experiment layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleLayout {
    pub center: Position,
    pub radius: f64,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self {
            center: Position::new(400.0, 200.0),
            radius: 150.0,
        }
    }
}

impl CircleLayout {
    /// Position of experiment `index` out of `total`, at angle
    /// `2π·index/total` on the circle.
    pub fn position(&self, index: usize, total: usize) -> Position {
        let angle = (index as f64 / total as f64) * 2.0 * PI;
        Position::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// Geometry of the per-experiment task grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskGridLayout {
    /// Top-left corner of the first experiment's column.
    pub base: Position,
    /// Horizontal distance between experiment columns.
    pub column_stride: f64,
    /// Vertical span a full column of tasks is spread over.
    pub column_span: f64,
}

impl Default for TaskGridLayout {
    fn default() -> Self {
        Self {
            base: Position::new(100.0, 300.0),
            column_stride: 300.0,
            column_span: 200.0,
        }
    }
}

impl TaskGridLayout {
    /// Position of task `task_index` of `total_tasks` in the column of
    /// experiment `experiment_index`.
    pub fn position(&self, experiment_index: usize, task_index: u32, total_tasks: u32) -> Position {
        Position::new(
            self.base.x + experiment_index as f64 * self.column_stride,
            self.base.y + (f64::from(task_index) / f64::from(total_tasks)) * self.column_span,
        )
    }
}
