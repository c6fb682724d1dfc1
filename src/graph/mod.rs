//! Build-graph data model: task nodes, rules, and the assembled graph.

pub mod check;
pub mod node;

pub use check::Graph;
pub use node::{ParamValue, Rule, TaskNode};
