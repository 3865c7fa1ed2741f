use clap::Parser;
use keiro::data::WorkflowSnapshot;
use keiro::workflow::{Experiment, ExperimentStatus, RiskLevel};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate randomized workflow snapshots for the keiro
/// graph builder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_snapshot.json")]
    output: String,

    /// The number of experiments to generate
    #[arg(short, long, default_value_t = 3)]
    experiments: usize,

    /// The minimum number of tasks per experiment
    #[arg(long, default_value_t = 5)]
    min_tasks: u32,

    /// The maximum number of tasks per experiment
    #[arg(long, default_value_t = 20)]
    max_tasks: u32,
}

const APPROACHES: &[(&str, &str)] = &[
    ("React Component Approach", "Component-based architecture with hooks"),
    ("Micro-service Approach", "Distributed services with GraphQL"),
    ("Monolithic Approach", "Traditional MVC with enhanced performance"),
    ("Event-sourcing Approach", "Append-only log with projections"),
    ("Serverless Approach", "Function-per-endpoint on managed infrastructure"),
    ("Modular Monolith Approach", "Strict module boundaries in one deployable"),
];

const TEAMS: &[&str] = &[
    "Frontend Team A",
    "Backend Team B",
    "Full-stack Team C",
    "Platform Team D",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min_tasks > cli.max_tasks {
        eprintln!(
            "Error: --min-tasks ({}) cannot be greater than --max-tasks ({})",
            cli.min_tasks, cli.max_tasks
        );
        std::process::exit(1);
    }

    println!(
        "Generating snapshot with {} experiments ({} to {} tasks each)...",
        cli.experiments, cli.min_tasks, cli.max_tasks
    );

    let mut snapshot = WorkflowSnapshot {
        experiments: Default::default(),
    };
    for index in 0..cli.experiments {
        let experiment = generate_experiment(&mut rng, index, cli.min_tasks, cli.max_tasks);
        snapshot.experiments.insert(experiment.id.clone(), experiment);
    }

    let json_output = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved snapshot to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_experiment(
    rng: &mut ThreadRng,
    index: usize,
    min_tasks: u32,
    max_tasks: u32,
) -> Experiment {
    let (name, approach) = APPROACHES[index % APPROACHES.len()];
    let total_tasks = rng.random_range(min_tasks..=max_tasks);
    let tasks_completed = if total_tasks == 0 {
        0
    } else {
        rng.random_range(0..=total_tasks)
    };
    let status = match rng.random_range(0..10) {
        0 => ExperimentStatus::Completed,
        1 => ExperimentStatus::Paused,
        2 => ExperimentStatus::Failed,
        _ => ExperimentStatus::Active,
    };
    let risk = match rng.random_range(0..3) {
        0 => RiskLevel::Low,
        1 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };

    Experiment {
        id: format!("exp-{:03}", index + 1),
        name: name.to_string(),
        approach: approach.to_string(),
        status,
        progress: (rng.random_range(0.0..=100.0_f64) * 10.0).round() / 10.0,
        tasks_completed,
        total_tasks,
        test_coverage: rng.random_range(50.0..=100.0),
        quality_score: rng.random_range(50.0..=100.0),
        velocity: (rng.random_range(0.5..=3.0_f64) * 100.0).round() / 100.0,
        estimated_completion: format!("2024-0{}-{:02}", rng.random_range(1..=9), rng.random_range(1..=28)),
        risk,
        team: TEAMS[index % TEAMS.len()].to_string(),
        branch: format!("feature/experiment-{:03}", index + 1),
        last_update: format!("{} hours ago", rng.random_range(1..=24)),
        tasks: vec![],
    }
}
