//! Segmentation-dictionary source: the word list a Chinese segmenter
//! ships with, used here as one more frequency signal. Chinese only.

use crate::Result;
use crate::config::Config;
use crate::graph::{Rule, TaskNode};
use crate::paths::wordlist_filename;
use crate::sources::cjk;
use anyhow::bail;

pub const SOURCE: &str = "segdict";

pub fn deps(cfg: &Config, dirname_in: &str, languages: &[String]) -> Result<Vec<TaskNode>> {
    match languages {
        [] => return Ok(Vec::new()),
        [only] if only == "zh" => {}
        other => bail!("the segmentation dictionary is Chinese-only, got {:?}", other),
    }

    let input_file = format!("{dirname_in}/dict.big.txt");
    let mut nodes = Vec::new();
    let transformed_file = cjk::simplified_chinese_input(&mut nodes, cfg, SOURCE, "zh", &input_file)?;
    let reformatted_file = wordlist_filename(cfg, SOURCE, "zh", "counts.txt")?;
    nodes.push(TaskNode::new(
        Rule::ConvertSegdict,
        vec![transformed_file],
        vec![reformatted_file],
    ));
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_language_set_plans_nothing() {
        let cfg = Config::default_corpus().unwrap();
        assert!(deps(&cfg, "data/source-lists/segdict", &[]).unwrap().is_empty());
    }

    #[test]
    fn non_chinese_configuration_is_fatal() {
        let cfg = Config::default_corpus().unwrap();
        assert!(deps(&cfg, "data/source-lists/segdict", &["ja".to_string()]).is_err());
        assert!(
            deps(
                &cfg,
                "data/source-lists/segdict",
                &["zh".to_string(), "ja".to_string()]
            )
            .is_err()
        );
    }

    #[test]
    fn simplifies_then_converts() {
        let cfg = Config::default_corpus().unwrap();
        let nodes = deps(&cfg, "data/source-lists/segdict", &["zh".to_string()]).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].rule, Rule::SimplifyChinese);
        assert_eq!(nodes[0].inputs, ["data/source-lists/segdict/dict.big.txt"]);
        assert_eq!(nodes[1].rule, Rule::ConvertSegdict);
        assert_eq!(nodes[1].inputs, nodes[0].outputs);
        assert_eq!(nodes[1].outputs, ["data/generated/segdict/segdict_zh.counts.txt"]);
    }
}
