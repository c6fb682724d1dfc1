//! The assembled build graph and its structural validation.
//!
//! The graph is an ordered list of task nodes plus the default targets the
//! engine builds when invoked with no arguments. The node order is the
//! order stanzas are emitted in, so it must already be topological.

use crate::Result;
use crate::graph::TaskNode;
use anyhow::bail;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<TaskNode>,
    pub defaults: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, nodes: Vec<TaskNode>) {
        self.nodes.extend(nodes);
    }

    /// Register a path the engine should build when given no target.
    pub fn default_target(&mut self, path: impl Into<String>) {
        self.defaults.push(path.into());
    }

    /// Validate the graph before emission:
    /// 1) every output is produced by exactly one node,
    /// 2) the node order is topological (nothing reads a file produced by
    ///    a later node; files produced by no node are raw inputs),
    /// 3) every default target is actually produced.
    pub fn check(&self) -> Result<()> {
        // 1) Unique producers.
        let mut producers: BTreeMap<&str, usize> = BTreeMap::new();
        for (index, node) in self.nodes.iter().enumerate() {
            if node.outputs.is_empty() {
                bail!("step #{} ({}) produces no outputs", index, node.rule.as_str());
            }
            for output in &node.outputs {
                if let Some(prev) = producers.insert(output.as_str(), index) {
                    bail!(
                        "output '{}' is produced twice, by step #{} ({}) and step #{} ({})",
                        output,
                        prev,
                        self.nodes[prev].rule.as_str(),
                        index,
                        node.rule.as_str()
                    );
                }
            }
        }

        // 2) Topological order over inputs and extra deps.
        for (index, node) in self.nodes.iter().enumerate() {
            for input in node.inputs.iter().chain(&node.extra_deps) {
                if let Some(&at) = producers.get(input.as_str()) {
                    if at >= index {
                        bail!(
                            "step #{} ({}) reads '{}', which is not produced until step #{} ({})",
                            index,
                            node.rule.as_str(),
                            input,
                            at,
                            self.nodes[at].rule.as_str()
                        );
                    }
                }
            }
        }

        // 3) Default targets exist.
        for target in &self.defaults {
            if !producers.contains_key(target.as_str()) {
                bail!("default target '{}' is not produced by any step", target);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Rule, TaskNode};

    fn node(rule: Rule, inputs: &[&str], outputs: &[&str]) -> TaskNode {
        TaskNode::new(
            rule,
            inputs.iter().map(|s| s.to_string()).collect(),
            outputs.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn graph_of(nodes: Vec<TaskNode>) -> Graph {
        Graph {
            nodes,
            defaults: Vec::new(),
        }
    }

    #[test]
    fn well_formed_graph_passes() {
        let mut graph = graph_of(vec![
            node(Rule::ExtractText, &["raw.bz2"], &["plain.txt"]),
            node(Rule::Count, &["plain.txt"], &["counts.txt"]),
        ]);
        graph.default_target("counts.txt");
        graph.check().unwrap();
    }

    #[test]
    fn duplicate_producer_is_rejected() {
        let graph = graph_of(vec![
            node(Rule::Count, &["a.txt"], &["counts.txt"]),
            node(Rule::Count, &["b.txt"], &["counts.txt"]),
        ]);
        let err = graph.check().unwrap_err().to_string();
        assert!(err.contains("produced twice"), "{err}");
    }

    #[test]
    fn forward_reference_is_rejected() {
        let graph = graph_of(vec![
            node(Rule::Count, &["plain.txt"], &["counts.txt"]),
            node(Rule::ExtractText, &["raw.bz2"], &["plain.txt"]),
        ]);
        let err = graph.check().unwrap_err().to_string();
        assert!(err.contains("not produced until"), "{err}");
    }

    #[test]
    fn forward_reference_through_extra_dep_is_rejected() {
        let graph = graph_of(vec![
            node(Rule::Count, &["plain.txt"], &["counts.txt"]).extra("tool.py"),
            node(Rule::Cat, &["src.txt"], &["tool.py"]),
        ]);
        assert!(graph.check().is_err());
    }

    #[test]
    fn unproduced_default_target_is_rejected() {
        let mut graph = graph_of(vec![node(Rule::Count, &["plain.txt"], &["counts.txt"])]);
        graph.default_target("missing.txt");
        let err = graph.check().unwrap_err().to_string();
        assert!(err.contains("default target"), "{err}");
    }

    #[test]
    fn inputs_produced_by_no_node_are_raw_files() {
        let graph = graph_of(vec![node(Rule::Count, &["never-built.txt"], &["counts.txt"])]);
        graph.check().unwrap();
    }
}
