use clap::{Parser, ValueEnum};
use keiro::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutCli {
    Hierarchical,
    Force,
    Circular,
    Dagre,
}

impl From<LayoutCli> for LayoutKind {
    fn from(layout: LayoutCli) -> Self {
        match layout {
            LayoutCli::Hierarchical => LayoutKind::Hierarchical,
            LayoutCli::Force => LayoutKind::Force,
            LayoutCli::Circular => LayoutKind::Circular,
            LayoutCli::Dagre => LayoutKind::Dagre,
        }
    }
}

/// A workflow graph construction and metrics engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a workflow snapshot JSON file; the built-in mock snapshot
    /// is used when omitted
    snapshot_path: Option<String>,

    /// The layout hint to record in the graph metadata
    #[arg(short, long, value_enum)]
    layout: Option<LayoutCli>,

    /// Project id recorded in the graph metadata
    #[arg(short, long)]
    project_id: Option<String>,

    /// Print the assembled graph and metrics as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Optional path to save the graph + metrics artifact to
    #[arg(short, long)]
    artifact: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Snapshot loading ---
    let snapshot = if let Some(path) = &cli.snapshot_path {
        WorkflowSnapshot::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load snapshot from '{}': {}", path, e))
        })
    } else {
        println!("No snapshot file provided. Using default mock data.");
        WorkflowSnapshot::mock()
    };

    // --- 2. Conversion and validation ---
    let workflow = snapshot
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert snapshot: {}", e)));
    workflow
        .validate()
        .unwrap_or_else(|e| exit_with_error(&format!("Snapshot failed validation: {}", e)));

    // --- 3. Graph assembly ---
    let build_start = Instant::now();
    let dependencies = generate_dependencies(&workflow);

    let mut builder = GraphBuilder::new(workflow.clone());
    if let Some(layout) = cli.layout {
        builder = builder.with_layout(layout.into());
    }
    if let Some(project_id) = &cli.project_id {
        builder = builder.with_project_id(project_id.clone());
    }
    let graph = builder.build(&dependencies);
    let build_duration = build_start.elapsed();

    println!(
        "Assembled {} nodes and {} edges in {:?}",
        graph.nodes.len(),
        graph.edges.len(),
        build_duration
    );

    // --- 4. Derived metrics ---
    let metrics = metrics::compute(&graph);
    let overview = ProjectOverview::from_workflow(&workflow);

    if cli.json {
        let payload = serde_json::json!({
            "graph": &graph,
            "metrics": &metrics,
            "overview": &overview,
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render JSON: {}", e)));
        println!("{}", rendered);
    } else {
        println!("\n{}", MetricsFormatter::format_metrics(&metrics));
        println!("\n{}", MetricsFormatter::format_overview(&overview));
    }

    // --- 5. Optional artifact ---
    if let Some(path) = &cli.artifact {
        let artifact = GraphArtifact::new(graph, metrics);
        artifact
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        println!("Saved artifact to '{}'", path);
    }

    println!("\nDone in {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
