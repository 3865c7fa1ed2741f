pub mod model;

pub use model::WorkflowSnapshot;
