//! Tests for dependency generation, graph assembly and layout.
mod common;
use common::*;
use keiro::prelude::*;
use std::f64::consts::PI;

const EPSILON: f64 = 1e-9;

#[test]
fn test_generate_dependencies_chains_consecutive_experiments() {
    let workflow = three_experiment_workflow();
    let deps = generate_dependencies(&workflow);

    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0].source, "exp-001");
    assert_eq!(deps[0].target, "exp-002");
    assert_eq!(deps[1].source, "exp-002");
    assert_eq!(deps[1].target, "exp-003");
    assert!(deps.iter().all(|d| d.kind == EdgeKind::Parallel));
}

#[test]
fn test_generate_dependencies_on_small_workflows() {
    assert!(generate_dependencies(&WorkflowDefinition::new()).is_empty());

    let one = single_experiment_workflow();
    assert!(generate_dependencies(&one).is_empty());
}

#[test]
fn test_node_and_edge_counts() {
    let workflow = four_experiment_workflow();
    let deps = generate_dependencies(&workflow);
    let graph = build_graph(&workflow, &deps);

    // 4 experiments + (5 + 0 + 8 + 3) tasks
    assert_eq!(graph.nodes.len(), 4 + 16);
    // 16 task edges + 3 dependency edges
    assert_eq!(graph.edges.len(), 16 + 3);
}

#[test]
fn test_empty_workflow_builds_empty_graph() {
    let graph = build_graph(&WorkflowDefinition::new(), &[]);
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
    assert!(graph.validate().is_ok());
}

#[test]
fn test_experiment_nodes_lie_on_the_circle() {
    let workflow = four_experiment_workflow();
    let graph = build_graph(&workflow, &[]);

    let circle = CircleLayout::default();
    for (index, node) in graph.nodes.iter().take(4).enumerate() {
        let dx = node.position.x - circle.center.x;
        let dy = node.position.y - circle.center.y;
        let distance = (dx * dx + dy * dy).sqrt();
        assert!(
            (distance - circle.radius).abs() < EPSILON,
            "node {} sits {} from the center, expected {}",
            node.id,
            distance,
            circle.radius
        );

        let expected_angle = (index as f64 / 4.0) * 2.0 * PI;
        let expected_x = circle.center.x + circle.radius * expected_angle.cos();
        let expected_y = circle.center.y + circle.radius * expected_angle.sin();
        assert!((node.position.x - expected_x).abs() < EPSILON);
        assert!((node.position.y - expected_y).abs() < EPSILON);
    }
}

#[test]
fn test_task_grid_positions() {
    let workflow = four_experiment_workflow();
    let graph = build_graph(&workflow, &[]);

    // Experiment "a" (index 0) has 5 tasks laid out in the first column.
    for i in 0..5u32 {
        let node = graph
            .node(&format!("a-task-{}", i))
            .expect("task node missing");
        assert!((node.position.x - 100.0).abs() < EPSILON);
        let expected_y = 300.0 + (f64::from(i) / 5.0) * 200.0;
        assert!((node.position.y - expected_y).abs() < EPSILON);
    }

    // Experiment "d" (index 3) starts its column three strides over.
    let node = graph.node("d-task-0").expect("task node missing");
    assert!((node.position.x - (100.0 + 3.0 * 300.0)).abs() < EPSILON);
}

#[test]
fn test_experiment_status_mapping() {
    let workflow = four_experiment_workflow();
    let graph = build_graph(&workflow, &[]);

    assert_eq!(graph.node("a").unwrap().status, NodeStatus::Active);
    assert_eq!(graph.node("b").unwrap().status, NodeStatus::Pending); // paused renders pending
    assert_eq!(graph.node("c").unwrap().status, NodeStatus::Completed);
    assert_eq!(graph.node("d").unwrap().status, NodeStatus::Failed);
}

#[test]
fn test_task_completion_boundary() {
    let workflow = WorkflowDefinition::from_experiments([experiment(
        "e1",
        ExperimentStatus::Active,
        5,
        2,
        40.0,
    )]);
    let graph = build_graph(&workflow, &[]);

    for i in 0..5u32 {
        let node = graph.node(&format!("e1-task-{}", i)).unwrap();
        let expected = if i < 2 {
            NodeStatus::Completed
        } else {
            NodeStatus::Pending
        };
        assert_eq!(node.status, expected, "task index {}", i);
    }
}

#[test]
fn test_task_priority_derived_from_index() {
    let workflow = WorkflowDefinition::from_experiments([experiment(
        "e1",
        ExperimentStatus::Active,
        8,
        0,
        0.0,
    )]);
    let graph = build_graph(&workflow, &[]);

    let priority_of = |i: u32| -> TaskPriority {
        match &graph.node(&format!("e1-task-{}", i)).unwrap().payload {
            NodePayload::Task(details) => details.priority,
            other => panic!("expected task payload, found {:?}", other.kind()),
        }
    };

    assert_eq!(priority_of(0), TaskPriority::High);
    assert_eq!(priority_of(2), TaskPriority::High);
    assert_eq!(priority_of(3), TaskPriority::Medium);
    assert_eq!(priority_of(5), TaskPriority::Medium);
    assert_eq!(priority_of(6), TaskPriority::Low);
    assert_eq!(priority_of(7), TaskPriority::Low);
}

#[test]
fn test_edge_identities_and_blocker_types() {
    let workflow = single_experiment_workflow();
    let deps = vec![DependencySpec {
        source: "e1".to_string(),
        target: "e1".to_string(),
        kind: EdgeKind::Conditional,
    }];
    let graph = build_graph(&workflow, &deps);

    // Supplied dependencies come first, task edges after.
    assert_eq!(graph.edges[0].id, "e1-e1");
    assert_eq!(graph.edges[0].kind, EdgeKind::Conditional);
    assert_eq!(graph.edges[0].data.blocker_type, BlockerType::Soft);
    assert_eq!(graph.edges[0].data.weight, Some(1.0));

    assert_eq!(graph.edges[1].id, "e1-to-e1-task-0");
    assert_eq!(graph.edges[1].source, "e1");
    assert_eq!(graph.edges[1].target, "e1-task-0");
    assert_eq!(graph.edges[1].kind, EdgeKind::Dependency);
    assert_eq!(graph.edges[1].data.blocker_type, BlockerType::Hard);

    assert_eq!(graph.edges[2].id, "e1-to-e1-task-1");
}

#[test]
fn test_nodes_ordered_experiments_then_tasks() {
    let workflow = four_experiment_workflow();
    let graph = build_graph(&workflow, &[]);

    let kinds: Vec<NodeKind> = graph.nodes.iter().map(|n| n.kind()).collect();
    let first_task = kinds
        .iter()
        .position(|k| *k == NodeKind::Task)
        .expect("no task nodes");
    assert_eq!(first_task, 4);
    assert!(kinds[..first_task]
        .iter()
        .all(|k| *k == NodeKind::Experiment));
    assert!(kinds[first_task..].iter().all(|k| *k == NodeKind::Task));
}

#[test]
fn test_every_edge_endpoint_resolves() {
    let workflow = four_experiment_workflow();
    let deps = generate_dependencies(&workflow);
    let graph = build_graph(&workflow, &deps);

    assert!(graph.validate().is_ok());
    for edge in &graph.edges {
        assert!(graph.contains_node(&edge.source), "dangling {}", edge.id);
        assert!(graph.contains_node(&edge.target), "dangling {}", edge.id);
    }
}

#[test]
fn test_build_is_structurally_idempotent() {
    let workflow = four_experiment_workflow();
    let deps = generate_dependencies(&workflow);
    let first = build_graph(&workflow, &deps);
    let second = build_graph(&workflow, &deps);

    assert_eq!(first.nodes.len(), second.nodes.len());
    assert_eq!(first.edges, second.edges);
    for (a, b) in first.nodes.iter().zip(second.nodes.iter()) {
        // Everything but the literal creation timestamp must match.
        assert_eq!(a.id, b.id);
        assert_eq!(a.label, b.label);
        assert_eq!(a.status, b.status);
        assert_eq!(a.position, b.position);
        assert_eq!(a.payload, b.payload);
        assert_eq!(a.metadata.tags, b.metadata.tags);
        assert_eq!(a.metadata.notes, b.metadata.notes);
    }
}

#[test]
fn test_builder_configuration_overrides() {
    let workflow = single_experiment_workflow();
    let graph = GraphBuilder::new(workflow)
        .with_layout(LayoutKind::Circular)
        .with_project_id("custom-project")
        .with_version("2.0.0")
        .with_circle(CircleLayout {
            center: Position::new(0.0, 0.0),
            radius: 10.0,
        })
        .build(&[]);

    assert_eq!(graph.metadata.layout, LayoutKind::Circular);
    assert_eq!(graph.metadata.project_id, "custom-project");
    assert_eq!(graph.metadata.version, "2.0.0");
    // Single experiment sits at angle 0 on the overridden circle.
    let node = graph.node("e1").unwrap();
    assert!((node.position.x - 10.0).abs() < EPSILON);
    assert!(node.position.y.abs() < EPSILON);
}

#[test]
fn test_experiment_payload_and_metadata() {
    let workflow = single_experiment_workflow();
    let graph = build_graph(&workflow, &[]);
    let node = graph.node("e1").unwrap();

    match &node.payload {
        NodePayload::Experiment(details) => {
            assert_eq!(details.progress, 50.0);
            assert_eq!(details.team, "Team Alpha");
            assert_eq!(details.risk, RiskLevel::Low);
        }
        other => panic!("expected experiment payload, found {:?}", other.kind()),
    }
    assert_eq!(
        node.metadata.tags,
        vec!["Team Alpha".to_string(), "low".to_string(), "active".to_string()]
    );
    assert_eq!(node.metadata.notes.as_deref(), Some("Branch: feature/e1"));
}
