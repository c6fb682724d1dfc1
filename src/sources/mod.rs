//! Rule generators, one per corpus family, and the orchestrator that
//! assembles their edges into the final graph.
//!
//! Each generator takes the configuration and its enabled language list
//! and returns an ordered list of task nodes. An empty language list
//! disables a source; restricted sources reject any other unsupported
//! set outright. Generators never see each other's state, so the
//! concatenation order below is what keeps the graph topological:
//! per-source edges first, combine edges (which read every source's
//! counts) last.

pub mod cjk;
pub mod encyclopedia;
pub mod ngrams;
pub mod norms;
pub mod segdict;
pub mod social;
pub mod wordlists;

use crate::Result;
use crate::combine;
use crate::config::Config;
use crate::graph::Graph;
use crate::paths::data_filename;
use tracing::debug;

/// Build the whole graph for one configuration.
pub fn plan(cfg: &Config) -> Result<Graph> {
    let mut graph = Graph::new();

    graph.extend(social::deps(
        cfg,
        &data_filename(cfg, "raw/social/all.txt"),
        &data_filename(cfg, "slices/social/social"),
        cfg.social_slices,
        cfg.languages_for(social::SOURCE),
    )?);
    graph.extend(encyclopedia::deps(
        cfg,
        &data_filename(cfg, "raw/encyclopedia"),
        cfg.languages_for(encyclopedia::SOURCE),
    )?);
    graph.extend(ngrams::deps(
        cfg,
        &data_filename(cfg, "raw/ngrams"),
        cfg.languages_for(ngrams::SOURCE),
    )?);
    graph.extend(wordlists::webcorpus_deps(
        cfg,
        &data_filename(cfg, "source-lists/webcorpus"),
        cfg.languages_for(wordlists::WEBCORPUS),
    )?);
    graph.extend(wordlists::subtitles_deps(
        cfg,
        &data_filename(cfg, "source-lists/subtitles"),
        cfg.languages_for(wordlists::SUBTITLES),
    )?);
    graph.extend(norms::en_deps(
        cfg,
        &data_filename(cfg, "source-lists/norms"),
        cfg.languages_for(norms::SOURCE_EN),
    )?);
    graph.extend(norms::other_deps(
        cfg,
        &data_filename(cfg, "source-lists/norms"),
        cfg.languages_for(norms::SOURCE_OTHER),
    )?);
    graph.extend(segdict::deps(
        cfg,
        &data_filename(cfg, "source-lists/segdict"),
        cfg.languages_for(segdict::SOURCE),
    )?);

    let (nodes, default_targets) = combine::deps(cfg, &cfg.all_languages())?;
    graph.extend(nodes);
    for target in default_targets {
        graph.default_target(target);
    }

    debug!(
        nodes = graph.nodes.len(),
        defaults = graph.defaults.len(),
        "assembled build graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Rule;

    #[test]
    fn default_plan_is_a_well_formed_graph() {
        let cfg = Config::default_corpus().unwrap();
        let graph = plan(&cfg).unwrap();
        graph.check().unwrap();
        assert!(!graph.defaults.is_empty());
    }

    #[test]
    fn disabling_a_source_removes_its_edges_only() {
        let mut cfg = Config::default_corpus().unwrap();
        cfg.sources.insert("ngrams".to_string(), Vec::new());
        let graph = plan(&cfg).unwrap();
        graph.check().unwrap();
        assert!(!graph.nodes.iter().any(|n| n.rule == Rule::ConvertNgrams));
        // English still merges from its remaining sources.
        let en_merge = graph
            .nodes
            .iter()
            .find(|n| n.rule == Rule::Merge && n.outputs[0].ends_with("combined_en.txt"))
            .unwrap();
        assert!(!en_merge.inputs.iter().any(|i| i.contains("ngrams")));
    }

    #[test]
    fn every_merge_input_is_produced_by_exactly_one_earlier_step() {
        let cfg = Config::default_corpus().unwrap();
        let graph = plan(&cfg).unwrap();
        for merge in graph.nodes.iter().filter(|n| n.rule == Rule::Merge) {
            for input in &merge.inputs {
                let producers = graph
                    .nodes
                    .iter()
                    .filter(|n| n.outputs.contains(input))
                    .count();
                assert_eq!(producers, 1, "{input}");
            }
        }
    }
}
