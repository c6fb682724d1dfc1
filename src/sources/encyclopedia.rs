//! Encyclopedic corpus: per-language article dumps, extracted to plain
//! text and counted.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;
use crate::sources::cjk;

pub const SOURCE: &str = "encyclopedia";

pub fn deps(cfg: &Config, dirname_in: &str, languages: &[String]) -> Result<Vec<TaskNode>> {
    let mut nodes = Vec::new();
    for language in languages {
        let input_file = format!("{dirname_in}/{language}/articles.xml.bz2");
        let plain_text_file = wordlist_filename(cfg, SOURCE, language, "txt")?;
        nodes.push(TaskNode::new(
            Rule::ExtractText,
            vec![input_file],
            vec![plain_text_file.clone()],
        ));

        let count_input = cjk::segmentable_tokens(&mut nodes, cfg, SOURCE, language, &plain_text_file)?;
        let count_file = wordlist_filename(cfg, SOURCE, language, "counts.txt")?;
        nodes.push(TaskNode::new(Rule::Count, vec![count_input], vec![count_file]));
    }
    Ok(nodes)
}
