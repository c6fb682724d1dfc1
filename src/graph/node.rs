//! Task node shape: one build step in the emitted plan.
//!
//! A node names a rule (one of the transformations the execution engine
//! knows how to run), the files it reads and writes, extra dependencies
//! that are not positional inputs (tool scripts, mostly), and key=value
//! parameters passed through to the rule.

use std::fmt;

/// The fixed set of transformations the downstream engine implements.
/// The emitted rule names must match the externally authored rules file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Split,
    TokenizeSocial,
    Cat,
    Count,
    ExtractText,
    SimplifyChinese,
    SegmentJapanese,
    ConvertNgrams,
    ConvertWebcorpus,
    ConvertSubtitles,
    ConvertNorms,
    ConvertSegdict,
    MergeCounts,
    Merge,
    Pack,
    CountsToSegdict,
    RegenPlan,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Split => "split",
            Rule::TokenizeSocial => "tokenize_social",
            Rule::Cat => "cat",
            Rule::Count => "count",
            Rule::ExtractText => "extract_text",
            Rule::SimplifyChinese => "simplify_chinese",
            Rule::SegmentJapanese => "segment_japanese",
            Rule::ConvertNgrams => "convert_ngrams",
            Rule::ConvertWebcorpus => "convert_webcorpus",
            Rule::ConvertSubtitles => "convert_subtitles",
            Rule::ConvertNorms => "convert_norms",
            Rule::ConvertSegdict => "convert_segdict",
            Rule::MergeCounts => "merge_counts",
            Rule::Merge => "merge",
            Rule::Pack => "pack",
            Rule::CountsToSegdict => "counts_to_segdict",
            Rule::RegenPlan => "regen_plan",
        }
    }
}

/// Parameter values are either text or numbers; both render as plain
/// `key = value` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(u64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<usize> for ParamValue {
    fn from(n: usize) -> Self {
        ParamValue::Int(n as u64)
    }
}

/// One build step. Input and output order is significant: the engine
/// passes them positionally to the rule's command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNode {
    pub rule: Rule,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub extra_deps: Vec<String>,
    pub params: Vec<(String, ParamValue)>,
}

impl TaskNode {
    pub fn new(rule: Rule, inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self {
            rule,
            inputs,
            outputs,
            extra_deps: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Add a non-positional dependency (typically a tool script).
    pub fn extra(mut self, dep: impl Into<String>) -> Self {
        self.extra_deps.push(dep.into());
        self
    }

    /// Add a `key = value` parameter. Parameters keep insertion order.
    pub fn param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }
}
