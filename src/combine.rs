//! Combine/finalize stage: merge every source's counts into one list per
//! language, derive the packed distributable artifacts, and pick the
//! default build targets.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;
use crate::sources::social;
use tracing::warn;

/// Merging and packing run through the counting toolkit; artifacts must
/// be redone when it changes.
const COUNTS_SCRIPT: &str = "scripts/word_counts.py";
const SEGDICT_EXPORT_SCRIPT: &str = "scripts/export_segdict.py";

pub fn deps(cfg: &Config, languages: &[String]) -> Result<(Vec<TaskNode>, Vec<String>)> {
    let mut nodes = Vec::new();
    let mut default_targets = Vec::new();

    for language in languages {
        let sources = cfg.source_names(language);
        if sources.is_empty() {
            // Merging zero inputs is undefined; leave the language out of
            // the plan but make the gap visible.
            warn!(%language, "no sources contribute to this language; skipping its combined list");
            continue;
        }

        let input_files = sources
            .iter()
            .map(|source| wordlist_filename(cfg, source, language, "counts.txt"))
            .collect::<Result<Vec<_>>>()?;
        let output_file = wordlist_filename(cfg, "combined", language, "txt")?;
        nodes.push(
            TaskNode::new(Rule::Merge, input_files, vec![output_file.clone()])
                .extra(COUNTS_SCRIPT)
                .param("cutoff", cfg.merge_cutoff)
                .param("lang", language.as_str()),
        );

        let packed_file = wordlist_filename(cfg, "combined-dist", language, "msgpack.gz")?;
        nodes.push(
            TaskNode::new(Rule::Pack, vec![output_file], vec![packed_file.clone()])
                .extra(COUNTS_SCRIPT)
                .param("lang", language.as_str()),
        );
        default_targets.push(packed_file);

        // Social frequencies are also distributed on their own, unmerged.
        if cfg.languages_for(social::SOURCE).contains(language) {
            let count_file = wordlist_filename(cfg, social::SOURCE, language, "counts.txt")?;
            let packed_file = wordlist_filename(cfg, "social-dist", language, "msgpack.gz")?;
            nodes.push(
                TaskNode::new(Rule::Pack, vec![count_file], vec![packed_file.clone()])
                    .extra(COUNTS_SCRIPT)
                    .param("lang", language.as_str()),
            );
            default_targets.push(packed_file);
        }
    }

    // The Chinese segmenter needs a frequency file in its own format,
    // derived from the combined list.
    let chinese_combined = wordlist_filename(cfg, "combined", "zh", "txt")?;
    let segdict_file = wordlist_filename(cfg, "segdict-dist", "zh", "txt")?;
    nodes.push(
        TaskNode::new(Rule::CountsToSegdict, vec![chinese_combined], vec![segdict_file.clone()])
            .extra(COUNTS_SCRIPT)
            .extra(SEGDICT_EXPORT_SCRIPT),
    );
    default_targets.push(segdict_file);

    Ok((nodes, default_targets))
}
