//! Social-text corpus: one large raw dump, split into fixed slices,
//! tokenized per slice into per-language streams, concatenated per
//! language, then counted.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;
use crate::sources::cjk;

pub const SOURCE: &str = "social";

/// The tokenizer implementation; counts must be redone when it changes.
const TOKENIZE_SCRIPT: &str = "scripts/tokenize.py";

pub fn deps(
    cfg: &Config,
    input_file: &str,
    slice_prefix: &str,
    slices: usize,
    languages: &[String],
) -> Result<Vec<TaskNode>> {
    let mut nodes = Vec::new();
    if languages.is_empty() {
        return Ok(nodes);
    }

    // Split the dump into fixed slices so tokenization parallelizes.
    let slice_files: Vec<String> = (0..slices)
        .map(|num| format!("{slice_prefix}.part{num:02}"))
        .collect();
    nodes.push(
        TaskNode::new(Rule::Split, vec![input_file.to_string()], slice_files.clone())
            .param("prefix", format!("{slice_prefix}.part"))
            .param("slices", slices),
    );

    // One tokenize step per slice, emitting one tagged stream per language.
    for slice_file in &slice_files {
        let language_outputs: Vec<String> = languages
            .iter()
            .map(|language| format!("{slice_file}.{language}.txt"))
            .collect();
        nodes.push(
            TaskNode::new(Rule::TokenizeSocial, vec![slice_file.clone()], language_outputs)
                .extra(TOKENIZE_SCRIPT)
                .param("prefix", slice_file.clone()),
        );
    }

    // Concatenate each language's slices back together, then count.
    for language in languages {
        let language_inputs: Vec<String> = slice_files
            .iter()
            .map(|slice_file| format!("{slice_file}.{language}.txt"))
            .collect();
        let combined_output = wordlist_filename(cfg, SOURCE, language, "tokens.txt")?;
        nodes.push(TaskNode::new(
            Rule::Cat,
            language_inputs,
            vec![combined_output.clone()],
        ));

        let count_input = cjk::segmentable_tokens(&mut nodes, cfg, SOURCE, language, &combined_output)?;
        let count_file = wordlist_filename(cfg, SOURCE, language, "counts.txt")?;
        nodes.push(
            TaskNode::new(Rule::Count, vec![count_input], vec![count_file]).extra(TOKENIZE_SCRIPT),
        );
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn empty_language_set_plans_nothing() {
        let cfg = Config::default_corpus().unwrap();
        let nodes = deps(&cfg, "data/raw/social/all.txt", "data/slices/social", 2, &[]).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn two_slices_two_languages() {
        let cfg = Config::default_corpus().unwrap();
        let nodes = deps(
            &cfg,
            "data/raw/social/all.txt",
            "data/slices/social",
            2,
            &langs(&["en", "es"]),
        )
        .unwrap();

        // 1 split + 2 tokenize + per language (cat + count).
        assert_eq!(nodes.len(), 7);

        let split = &nodes[0];
        assert_eq!(split.rule, Rule::Split);
        assert_eq!(
            split.outputs,
            ["data/slices/social.part00", "data/slices/social.part01"]
        );

        let tokenize: Vec<_> = nodes.iter().filter(|n| n.rule == Rule::TokenizeSocial).collect();
        assert_eq!(tokenize.len(), 2);
        assert_eq!(
            tokenize[0].outputs,
            [
                "data/slices/social.part00.en.txt",
                "data/slices/social.part00.es.txt"
            ]
        );

        let cats: Vec<_> = nodes.iter().filter(|n| n.rule == Rule::Cat).collect();
        assert_eq!(cats.len(), 2);
        assert_eq!(
            cats[0].inputs,
            [
                "data/slices/social.part00.en.txt",
                "data/slices/social.part01.en.txt"
            ]
        );

        let counts: Vec<_> = nodes.iter().filter(|n| n.rule == Rule::Count).collect();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].inputs, ["data/generated/social/social_en.tokens.txt"]);
    }

    #[test]
    fn japanese_counts_run_over_segmented_tokens() {
        let cfg = Config::default_corpus().unwrap();
        let nodes = deps(
            &cfg,
            "data/raw/social/all.txt",
            "data/slices/social",
            1,
            &langs(&["ja"]),
        )
        .unwrap();

        let segment = nodes.iter().find(|n| n.rule == Rule::SegmentJapanese).unwrap();
        let count = nodes.iter().find(|n| n.rule == Rule::Count).unwrap();
        assert_eq!(segment.inputs, ["data/generated/social/social_ja.tokens.txt"]);
        assert_eq!(count.inputs, segment.outputs);
    }
}
