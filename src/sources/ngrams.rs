//! Sharded n-gram corpus. English data only, shipped as a fixed number of
//! numbered shard files that one conversion step consumes together.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;
use anyhow::bail;

pub const SOURCE: &str = "ngrams";

pub fn deps(cfg: &Config, dirname_in: &str, languages: &[String]) -> Result<Vec<TaskNode>> {
    match languages {
        [] => return Ok(Vec::new()),
        [only] if only == "en" => {}
        other => bail!("the n-gram corpus only provides English data, got {:?}", other),
    }

    // Shards are numbered 00 through N-1, zero-padded to two digits.
    let shards = cfg.ngram_shards;
    let input_files: Vec<String> = (0..shards)
        .map(|num| format!("{dirname_in}/shard.{num:02}-of-{shards}.gz"))
        .collect();
    let output_file = wordlist_filename(cfg, SOURCE, "en", "counts.txt")?;

    Ok(vec![TaskNode::new(
        Rule::ConvertNgrams,
        input_files,
        vec![output_file],
    )])
}
