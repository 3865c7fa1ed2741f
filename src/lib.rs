//! # Keiro - Workflow Graph Construction and Metrics Engine
//!
//! **Keiro** transforms a collection of parallel development experiments
//! into a renderable graph structure with deterministic layout positions,
//! and derives aggregate metrics from it. It is the data core behind a
//! workflow dashboard: the rendering layer consumes the `GraphData` it
//! produces, an upstream source (real or simulated) supplies the
//! experiment snapshots.
//!
//! ## Core Workflow
//!
//! The engine is designed to be source-agnostic. It operates on a
//! canonical internal model of a "workflow definition." The primary
//! workflow is:
//!
//! 1.  **Load Your Data**: Parse your project-tracking format (JSON file,
//!     API response, etc.) into your own Rust structs, or use the bundled
//!     `WorkflowSnapshot`.
//! 2.  **Convert to Keiro's Model**: Implement the `IntoWorkflow` trait
//!     for your structs to provide a translation layer into keiro's
//!     `WorkflowDefinition`.
//! 3.  **Build**: Use `GraphBuilder` (or the `build_graph` shorthand) to
//!     assemble a `GraphData` — experiment nodes on a circle, synthetic
//!     task nodes on a grid, dependency edges chaining them together.
//! 4.  **Derive**: Run `metrics::compute` over the graph for status
//!     tallies, completion rate, critical path length and a completion
//!     estimate, ready for the dashboard's summary panels.
//!
//! Every stage is a pure, synchronous transformation: fresh output on
//! each call, no mutation of the input, no shared state between calls.
//! A refresh timer can drive the whole pipeline as often as it likes.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // An upstream snapshot; `WorkflowSnapshot::from_file` loads the
//!     // same shape from JSON.
//!     let snapshot = WorkflowSnapshot::mock();
//!
//!     // Convert into the canonical definition and validate at the
//!     // boundary; the transforms themselves never validate.
//!     let workflow = snapshot.into_workflow()?;
//!     workflow.validate()?;
//!
//!     // Without an explicit dependency list, chain the experiments in
//!     // insertion order.
//!     let dependencies = generate_dependencies(&workflow);
//!
//!     let graph = GraphBuilder::new(workflow.clone())
//!         .with_project_id("demo")
//!         .build(&dependencies);
//!
//!     let metrics = metrics::compute(&graph);
//!     let overview = ProjectOverview::from_workflow(&workflow);
//!
//!     println!("{}", MetricsFormatter::format_metrics(&metrics));
//!     println!("{}", MetricsFormatter::format_overview(&overview));
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model;
pub mod prelude;
pub mod report;
pub mod workflow;
