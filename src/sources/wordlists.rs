//! Pre-counted wordlist sources: internet-derived wordlists and subtitle
//! wordlists. One conversion step per language turns the upstream format
//! into our counts format, with Chinese routed through script
//! simplification first.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;
use crate::sources::cjk;

pub const WEBCORPUS: &str = "webcorpus";
pub const SUBTITLES: &str = "subtitles";

pub fn webcorpus_deps(cfg: &Config, dirname_in: &str, languages: &[String]) -> Result<Vec<TaskNode>> {
    let mut nodes = Vec::new();
    for language in languages {
        let input_file = format!("{dirname_in}/web-{language}.num");
        convert_deps(cfg, WEBCORPUS, Rule::ConvertWebcorpus, input_file, language, &mut nodes)?;
    }
    Ok(nodes)
}

pub fn subtitles_deps(cfg: &Config, dirname_in: &str, languages: &[String]) -> Result<Vec<TaskNode>> {
    let mut nodes = Vec::new();
    for language in languages {
        let input_file = format!("{dirname_in}/{language}.txt");
        convert_deps(cfg, SUBTITLES, Rule::ConvertSubtitles, input_file, language, &mut nodes)?;
    }
    Ok(nodes)
}

fn convert_deps(
    cfg: &Config,
    source: &str,
    rule: Rule,
    input_file: String,
    language: &str,
    nodes: &mut Vec<TaskNode>,
) -> Result<()> {
    let step2_file = cjk::simplified_chinese_input(nodes, cfg, source, language, &input_file)?;
    let reformatted_file = wordlist_filename(cfg, source, language, "counts.txt")?;
    nodes.push(TaskNode::new(rule, vec![step2_file], vec![reformatted_file]));
    Ok(())
}
