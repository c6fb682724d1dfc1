//! Frequency-norm lists. Two sub-sources: the English one ships regional
//! files (en-US, en-GB) that are converted separately and merged, the
//! other one ships one file per language. Column layout varies per
//! language and comes from a static table.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;
use crate::sources::cjk;
use anyhow::bail;

pub const SOURCE_EN: &str = "norms-en";
pub const SOURCE_OTHER: &str = "norms-other";

const REGIONS: &[&str] = &["en-US", "en-GB"];

/// Which 1-based columns hold the word and its frequency, per language.
const COLUMN_MAP: &[(&str, (u64, u64))] = &[
    ("de", (1, 3)),
    ("el", (2, 3)),
    ("en", (1, 2)),
    ("nl", (1, 2)),
    ("zh", (1, 5)),
];

/// Data starts on row 2; every norms file carries one header row.
const START_ROW: u64 = 2;

fn columns(language: &str) -> Result<(u64, u64)> {
    match COLUMN_MAP.iter().find(|(lang, _)| *lang == language) {
        Some((_, cols)) => Ok(*cols),
        None => bail!("no column layout known for norms language '{}'", language),
    }
}

pub fn en_deps(cfg: &Config, dirname_in: &str, languages: &[String]) -> Result<Vec<TaskNode>> {
    match languages {
        [] => return Ok(Vec::new()),
        [only] if only == "en" => {}
        other => bail!("the regional norms source is English-only, got {:?}", other),
    }

    let (textcol, freqcol) = columns("en")?;
    let mut nodes = Vec::new();
    let mut processed_files = Vec::new();
    for region in REGIONS {
        let input_file = format!("{dirname_in}/norms.{region}.txt");
        let processed_file = wordlist_filename(cfg, SOURCE_EN, region, "processed.txt")?;
        nodes.push(
            TaskNode::new(Rule::ConvertNorms, vec![input_file], vec![processed_file.clone()])
                .param("textcol", textcol)
                .param("freqcol", freqcol)
                .param("startrow", START_ROW),
        );
        processed_files.push(processed_file);
    }

    let output_file = wordlist_filename(cfg, SOURCE_EN, "en", "counts.txt")?;
    nodes.push(TaskNode::new(Rule::MergeCounts, processed_files, vec![output_file]));
    Ok(nodes)
}

pub fn other_deps(cfg: &Config, dirname_in: &str, languages: &[String]) -> Result<Vec<TaskNode>> {
    let mut nodes = Vec::new();
    for language in languages {
        let (textcol, freqcol) = columns(language)?;
        let input_file = format!("{dirname_in}/norms.{language}.txt");
        let step2_file = cjk::simplified_chinese_input(&mut nodes, cfg, SOURCE_OTHER, language, &input_file)?;

        let processed_file = wordlist_filename(cfg, SOURCE_OTHER, language, "processed.txt")?;
        nodes.push(
            TaskNode::new(Rule::ConvertNorms, vec![step2_file], vec![processed_file.clone()])
                .param("textcol", textcol)
                .param("freqcol", freqcol)
                .param("startrow", START_ROW),
        );

        // merge_counts over one input normalizes the counts format.
        let output_file = wordlist_filename(cfg, SOURCE_OTHER, language, "counts.txt")?;
        nodes.push(TaskNode::new(Rule::MergeCounts, vec![processed_file], vec![output_file]));
    }
    Ok(nodes)
}
