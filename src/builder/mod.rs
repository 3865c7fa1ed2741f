//! Assembles `GraphData` from a `WorkflowDefinition`.

mod dependency;
mod layout;

pub use dependency::{DependencySpec, generate_dependencies};
pub use layout::{CircleLayout, TaskGridLayout};

use crate::model::{
    EdgeData, EdgeKind, ExperimentDetails, GraphData, GraphEdge, GraphMetadata, GraphNode,
    LayoutKind, NodeMetadata, NodePayload, NodeStatus, TaskDetails,
};
use crate::workflow::{Experiment, TaskPriority, WorkflowDefinition};
use chrono::Utc;

/// Builds renderable graphs out of workflow definitions.
///
/// One node per experiment on a circle, one synthetic node per reported
/// task on a grid beneath it, and edges from the supplied dependency list
/// plus one hard edge tying each task to its parent. Every call allocates
/// a fresh `GraphData` and never mutates the definition, so a builder can
/// be invoked repeatedly from a refresh loop without synchronization.
///
/// The build is total over well-formed input. Data-model invariants
/// (`tasks_completed <= total_tasks`, percentages in range) are the
/// caller's responsibility; see `WorkflowDefinition::validate`.
pub struct GraphBuilder {
    workflow: WorkflowDefinition,
    circle: CircleLayout,
    task_grid: TaskGridLayout,
    layout: LayoutKind,
    project_id: String,
    version: String,
}

impl GraphBuilder {
    pub fn new(workflow: WorkflowDefinition) -> Self {
        Self {
            workflow,
            circle: CircleLayout::default(),
            task_grid: TaskGridLayout::default(),
            layout: LayoutKind::Hierarchical,
            project_id: "workflow-main".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    /// Overrides the circular layout geometry for experiment nodes.
    pub fn with_circle(mut self, circle: CircleLayout) -> Self {
        self.circle = circle;
        self
    }

    /// Overrides the task grid geometry.
    pub fn with_task_grid(mut self, task_grid: TaskGridLayout) -> Self {
        self.task_grid = task_grid;
        self
    }

    /// Records a different layout hint in the graph metadata.
    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Assembles the graph: experiment nodes first, then task nodes, then
    /// the edge set (supplied dependencies before task edges).
    ///
    /// Every edge endpoint is guaranteed to resolve to an emitted node,
    /// since tasks and experiments are generated from the same definition
    /// the edges reference.
    pub fn build(&self, dependencies: &[DependencySpec]) -> GraphData {
        let now = Utc::now().to_rfc3339();
        let total = self.workflow.len();
        let total_tasks: usize = self
            .workflow
            .experiments
            .values()
            .map(|exp| exp.total_tasks as usize)
            .sum();

        let mut nodes = Vec::with_capacity(total + total_tasks);
        for (index, exp) in self.workflow.experiments.values().enumerate() {
            nodes.push(self.experiment_node(exp, index, total, &now));
        }

        let mut task_edges = Vec::with_capacity(total_tasks);
        for (exp_index, exp) in self.workflow.experiments.values().enumerate() {
            for task_index in 0..exp.total_tasks {
                let node = self.task_node(exp, exp_index, task_index, &now);
                task_edges.push(task_edge(&exp.id, &node.id));
                nodes.push(node);
            }
        }

        let mut edges: Vec<GraphEdge> = dependencies.iter().map(dependency_edge).collect();
        edges.extend(task_edges);

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "assembled workflow graph"
        );

        GraphData {
            nodes,
            edges,
            metadata: GraphMetadata {
                project_id: self.project_id.clone(),
                version: self.version.clone(),
                last_modified: now,
                layout: self.layout,
            },
        }
    }

    fn experiment_node(
        &self,
        exp: &Experiment,
        index: usize,
        total: usize,
        now: &str,
    ) -> GraphNode {
        GraphNode {
            id: exp.id.clone(),
            label: exp.name.clone(),
            status: exp.status.into(),
            position: self.circle.position(index, total),
            payload: NodePayload::Experiment(ExperimentDetails {
                approach: exp.approach.clone(),
                progress: exp.progress,
                test_coverage: exp.test_coverage,
                quality_score: exp.quality_score,
                velocity: exp.velocity,
                risk: exp.risk,
                team: exp.team.clone(),
                estimated_completion: exp.estimated_completion.clone(),
            }),
            metadata: NodeMetadata {
                created_at: now.to_string(),
                last_updated: exp.last_update.clone(),
                tags: vec![
                    exp.team.clone(),
                    exp.risk.to_string(),
                    exp.status.to_string(),
                ],
                notes: Some(format!("Branch: {}", exp.branch)),
            },
        }
    }

    fn task_node(
        &self,
        exp: &Experiment,
        exp_index: usize,
        task_index: u32,
        now: &str,
    ) -> GraphNode {
        let completed = task_index < exp.tasks_completed;
        GraphNode {
            id: format!("{}-task-{}", exp.id, task_index),
            label: format!("Task {}", task_index + 1),
            status: if completed {
                NodeStatus::Completed
            } else {
                NodeStatus::Pending
            },
            position: self
                .task_grid
                .position(exp_index, task_index, exp.total_tasks),
            payload: NodePayload::Task(TaskDetails {
                description: format!("Task {} for {}", task_index + 1, exp.name),
                assignee: exp.team.clone(),
                priority: priority_for_index(task_index),
                estimated_hours: 8.0,
                actual_hours: None,
                blockers: vec![],
            }),
            metadata: NodeMetadata {
                created_at: now.to_string(),
                last_updated: exp.last_update.clone(),
                tags: vec![exp.team.clone(), "task".to_string()],
                notes: Some(format!("Part of {} experiment", exp.name)),
            },
        }
    }
}

/// Priority of a synthetic task, derived purely from its index: the first
/// three tasks are high, the next three medium, the rest low.
fn priority_for_index(task_index: u32) -> TaskPriority {
    if task_index < 3 {
        TaskPriority::High
    } else if task_index < 6 {
        TaskPriority::Medium
    } else {
        TaskPriority::Low
    }
}

fn dependency_edge(spec: &DependencySpec) -> GraphEdge {
    GraphEdge {
        id: format!("{}-{}", spec.source, spec.target),
        source: spec.source.clone(),
        target: spec.target.clone(),
        kind: spec.kind,
        data: EdgeData::soft(),
    }
}

fn task_edge(experiment_id: &str, task_id: &str) -> GraphEdge {
    GraphEdge {
        id: format!("{experiment_id}-to-{task_id}"),
        source: experiment_id.to_string(),
        target: task_id.to_string(),
        kind: EdgeKind::Dependency,
        data: EdgeData::hard(),
    }
}

/// Builds a graph with the default layout and metadata, the common case.
pub fn build_graph(workflow: &WorkflowDefinition, dependencies: &[DependencySpec]) -> GraphData {
    GraphBuilder::new(workflow.clone()).build(dependencies)
}
