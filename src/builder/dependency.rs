use crate::model::EdgeKind;
use crate::workflow::WorkflowDefinition;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A dependency descriptor between two experiments, as supplied to the
/// graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencySpec {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// Derives a default ordering between experiments when the upstream
/// source supplies no explicit dependency list.
///
/// Chains consecutive experiments in insertion order with `parallel`
/// edges, yielding `max(0, k - 1)` descriptors for `k` experiments. This
/// is an ordering convention, not a dependency analysis over tasks.
pub fn generate_dependencies(workflow: &WorkflowDefinition) -> Vec<DependencySpec> {
    workflow
        .experiments
        .keys()
        .tuple_windows()
        .map(|(prev, next)| DependencySpec {
            source: prev.clone(),
            target: next.clone(),
            kind: EdgeKind::Parallel,
        })
        .collect()
}
