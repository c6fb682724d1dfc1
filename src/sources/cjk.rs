//! Cross-cutting language handling shared by every generator.
//!
//! Two languages break the default pipeline shape:
//! - Chinese sources arrive in traditional or mixed script and must be
//!   converted to simplified before any other processing step.
//! - Japanese has no whitespace word boundaries, so counting runs over
//!   dictionary-segmented tokens instead of the plain token stream.
//!
//! Both helpers take the pipeline's current last output and give back the
//! next step's input, appending the conversion node when it applies. Call
//! sites stay identical across generators, and unaffected languages keep
//! their paths untouched.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;

/// Filename variant for script-converted Chinese intermediates.
pub const SIMPLIFIED_VARIANT: &str = "zh-Hans";

/// Route Chinese input through script simplification; anything else
/// passes through unchanged.
pub fn simplified_chinese_input(
    nodes: &mut Vec<TaskNode>,
    cfg: &Config,
    source: &str,
    language: &str,
    input: &str,
) -> Result<String> {
    if language != "zh" {
        return Ok(input.to_string());
    }
    let converted = wordlist_filename(cfg, source, SIMPLIFIED_VARIANT, "converted.txt")?;
    nodes.push(TaskNode::new(
        Rule::SimplifyChinese,
        vec![input.to_string()],
        vec![converted.clone()],
    ));
    Ok(converted)
}

/// Splice dictionary segmentation between plain text and counting for
/// Japanese; anything else passes through unchanged.
pub fn segmentable_tokens(
    nodes: &mut Vec<TaskNode>,
    cfg: &Config,
    source: &str,
    language: &str,
    input: &str,
) -> Result<String> {
    if language != "ja" {
        return Ok(input.to_string());
    }
    let segmented = wordlist_filename(cfg, source, language, "mecab-tokens.txt")?;
    nodes.push(TaskNode::new(
        Rule::SegmentJapanese,
        vec![input.to_string()],
        vec![segmented.clone()],
    ));
    Ok(segmented)
}
