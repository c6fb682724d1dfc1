//! Render the assembled graph into the engine's textual build format.
//!
//! Stanza shape:
//!
//! ```text
//! build <outputs>: <rule> <inputs>[ | <extra deps>]
//!   key = value
//! ```
//!
//! followed by a blank line, then `default <path>` declarations. The
//! whole plan is rendered to one string before anything is written, so a
//! failure can never leave a truncated graph behind.

use crate::Result;
use crate::graph::{Graph, Rule, TaskNode};
use std::fmt::Write;

/// The file the engine reads; also the output of the bootstrap stanza.
pub const OUTPUT_FILE: &str = "build.ninja";

const HEADER: &str = "# This file is automatically generated by freqplan. Do not edit it.\n\
                      # Change the configuration or the rules file and rerun freqplan.\n";

pub fn render_plan(
    rules_text: &str,
    rules_path: &str,
    config_path: Option<&str>,
    graph: &Graph,
) -> Result<String> {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    // The rules block is externally authored; copy it in verbatim.
    out.push_str(rules_text);
    if !rules_text.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');

    // Regenerating the planner's inputs invalidates the plan itself.
    let mut bootstrap = TaskNode::new(
        Rule::RegenPlan,
        vec![rules_path.to_string()],
        vec![OUTPUT_FILE.to_string()],
    );
    if let Some(path) = config_path {
        bootstrap = bootstrap.extra(path);
    }
    write_stanza(&mut out, &bootstrap)?;

    for node in &graph.nodes {
        write_stanza(&mut out, node)?;
    }

    for target in &graph.defaults {
        writeln!(out, "default {}", target)?;
    }

    Ok(out)
}

fn write_stanza(out: &mut String, node: &TaskNode) -> Result<()> {
    write!(
        out,
        "build {outputs}: {rule} {inputs}",
        outputs = node.outputs.join(" "),
        rule = node.rule.as_str(),
        inputs = node.inputs.join(" "),
    )?;
    if !node.extra_deps.is_empty() {
        write!(out, " | {}", node.extra_deps.join(" "))?;
    }
    out.push('\n');
    for (key, value) in &node.params {
        writeln!(out, "  {} = {}", key, value)?;
    }
    out.push('\n');
    Ok(())
}
