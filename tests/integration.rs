//! Integration tests for keiro
//!
//! End-to-end tests that verify the complete pipeline works together:
//! snapshot -> workflow -> dependencies -> graph -> metrics -> artifact.
mod common;
use keiro::prelude::*;

const SNAPSHOT_JSON: &str = r#"{
  "experiments": {
    "exp-001": {
      "id": "exp-001",
      "name": "React Component Approach",
      "approach": "Component-based architecture with hooks",
      "status": "active",
      "progress": 75.0,
      "tasksCompleted": 15,
      "totalTasks": 20,
      "testCoverage": 92.0,
      "qualityScore": 88.0,
      "velocity": 2.3,
      "estimatedCompletion": "2024-01-15",
      "risk": "low",
      "team": "Frontend Team A",
      "branch": "feature/react-components",
      "lastUpdate": "2 hours ago"
    },
    "exp-002": {
      "id": "exp-002",
      "name": "Micro-service Approach",
      "approach": "Distributed services with GraphQL",
      "status": "completed",
      "progress": 100.0,
      "tasksCompleted": 20,
      "totalTasks": 20,
      "testCoverage": 85.0,
      "qualityScore": 82.0,
      "velocity": 1.8,
      "estimatedCompletion": "2024-01-18",
      "risk": "medium",
      "team": "Backend Team B",
      "branch": "feature/microservices",
      "lastUpdate": "4 hours ago"
    }
  }
}"#;

#[test]
fn test_full_pipeline_from_mock_snapshot() {
    let snapshot = WorkflowSnapshot::mock();
    let workflow = snapshot.into_workflow().expect("conversion failed");
    workflow.validate().expect("mock data failed validation");

    let dependencies = generate_dependencies(&workflow);
    assert_eq!(dependencies.len(), 2);

    let graph = build_graph(&workflow, &dependencies);
    assert!(graph.validate().is_ok());

    // 3 experiments with 20 tasks each.
    assert_eq!(graph.nodes.len(), 3 + 60);
    assert_eq!(graph.edges.len(), 60 + 2);

    let metrics = metrics::compute(&graph);
    assert_eq!(metrics.total_nodes, 63);
    assert_eq!(metrics.total_edges, 62);
    assert_eq!(metrics.critical_path_length, 3);
    // 15 + 12 + 9 completed synthetic tasks, no completed experiments.
    assert_eq!(metrics.nodes_by_status[&NodeStatus::Completed], 36);

    let overview = ProjectOverview::from_workflow(&workflow);
    assert_eq!(overview.total_experiments, 3);
    assert_eq!(overview.active_experiments, 3);
    assert_eq!(overview.completed_experiments, 0);
}

#[test]
fn test_full_pipeline_from_json_snapshot() {
    let snapshot: WorkflowSnapshot =
        serde_json::from_str(SNAPSHOT_JSON).expect("Failed to parse snapshot");
    let workflow = snapshot.into_workflow().expect("conversion failed");
    workflow.validate().expect("snapshot failed validation");

    let dependencies = generate_dependencies(&workflow);
    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0].source, "exp-001");
    assert_eq!(dependencies[0].target, "exp-002");

    let graph = build_graph(&workflow, &dependencies);
    assert_eq!(graph.nodes.len(), 2 + 40);
    assert_eq!(graph.edges.len(), 40 + 1);
    assert!(graph.validate().is_ok());

    let metrics = metrics::compute(&graph);
    // exp-002 and its 20 tasks plus 15 of exp-001's tasks are completed.
    assert_eq!(metrics.nodes_by_status[&NodeStatus::Completed], 36);
    assert_eq!(metrics.edges_by_kind[&EdgeKind::Parallel], 1);
    assert_eq!(metrics.edges_by_kind[&EdgeKind::Dependency], 40);
}

#[test]
fn test_graph_serializes_to_renderer_json() {
    let snapshot: WorkflowSnapshot =
        serde_json::from_str(SNAPSHOT_JSON).expect("Failed to parse snapshot");
    let workflow = snapshot.into_workflow().expect("conversion failed");
    let graph = build_graph(&workflow, &generate_dependencies(&workflow));

    let value = serde_json::to_value(&graph).expect("Failed to serialize graph");
    assert_eq!(value["nodes"].as_array().unwrap().len(), 42);
    assert_eq!(value["metadata"]["layout"], "hierarchical");
    assert_eq!(value["edges"][0]["type"], "parallel");

    // Round-trips through the same shape.
    let restored: GraphData = serde_json::from_value(value).expect("Failed to deserialize graph");
    assert_eq!(restored, graph);
}

#[test]
fn test_artifact_round_trip() {
    let workflow = WorkflowSnapshot::mock()
        .into_workflow()
        .expect("conversion failed");
    let graph = build_graph(&workflow, &generate_dependencies(&workflow));
    let metrics = metrics::compute(&graph);

    let artifact = GraphArtifact::new(graph, metrics);
    let bytes = artifact.to_bytes().expect("Failed to encode artifact");
    let restored = GraphArtifact::from_bytes(&bytes).expect("Failed to decode artifact");

    assert_eq!(restored, artifact);
    assert_eq!(restored.graph.nodes.len(), 63);
    assert_eq!(restored.metrics.total_nodes, 63);
}

#[test]
fn test_artifact_file_round_trip() {
    let workflow = WorkflowSnapshot::mock()
        .into_workflow()
        .expect("conversion failed");
    let graph = build_graph(&workflow, &generate_dependencies(&workflow));
    let metrics = metrics::compute(&graph);
    let artifact = GraphArtifact::new(graph, metrics);

    let path = std::env::temp_dir().join("keiro-artifact-test.bin");
    let path = path.to_str().expect("temp path is not utf-8");
    artifact.save(path).expect("Failed to save artifact");
    let restored = GraphArtifact::from_file(path).expect("Failed to load artifact");
    let _ = std::fs::remove_file(path);

    assert_eq!(restored, artifact);
}

#[test]
fn test_rebuild_after_simulated_refresh() {
    // A refresh cycle hands the pipeline a new snapshot; the previous
    // graph is unaffected and the new one reflects the changed counts.
    let mut snapshot = WorkflowSnapshot::mock();
    let workflow = snapshot.clone().into_workflow().expect("conversion failed");
    let first = build_graph(&workflow, &generate_dependencies(&workflow));

    if let Some(exp) = snapshot.experiments.get_mut("exp-001") {
        exp.tasks_completed = 20;
        exp.progress = 100.0;
        exp.status = ExperimentStatus::Completed;
    }
    let workflow = snapshot.into_workflow().expect("conversion failed");
    let second = build_graph(&workflow, &generate_dependencies(&workflow));

    assert_eq!(first.node("exp-001").unwrap().status, NodeStatus::Active);
    assert_eq!(
        second.node("exp-001").unwrap().status,
        NodeStatus::Completed
    );
    let first_completed = metrics::compute(&first).nodes_by_status[&NodeStatus::Completed];
    let second_completed = metrics::compute(&second).nodes_by_status[&NodeStatus::Completed];
    assert_eq!(second_completed, first_completed + 6);
}
