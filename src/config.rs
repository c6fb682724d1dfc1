//! Corpus configuration: which sources exist, which languages each one is
//! enabled for, where their generated wordlists live, and a few tunables.
//!
//! We keep two representations:
//! - ConfigSpec: raw JSON input (serde-friendly)
//! - Config: validated and normalized in-memory structure
//!
//! The planner only ever reads a Config; generators receive it by
//! reference and never mutate it.

use crate::Result;
use anyhow::bail;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Every language code a source may be enabled for.
pub const LANGUAGES: &[&str] = &[
    "ar", "de", "el", "en", "es", "fr", "hu", "id", "it", "ja", "ko", "ms", "nl", "pl", "pt",
    "ro", "ru", "sv", "tr", "zh",
];

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSpec {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Source name -> language codes it is enabled for.
    pub sources: BTreeMap<String, Vec<String>>,

    /// Source name -> generated-file template. Templates must contain
    /// `{lang}` and `{ext}` and be pairwise distinct, which keeps the
    /// (source, language, extension) -> path mapping injective.
    pub wordlist_paths: BTreeMap<String, String>,

    /// How many slices the social dump is split into.
    #[serde(default = "default_social_slices")]
    pub social_slices: usize,

    /// How many shard files the n-gram corpus ships as.
    #[serde(default = "default_ngram_shards")]
    pub ngram_shards: usize,

    /// Minimum occurrence count a word needs to survive the merge step.
    #[serde(default = "default_merge_cutoff")]
    pub merge_cutoff: u64,

    /// A language only gets a combined list if at least this many sources
    /// contribute to it.
    #[serde(default = "default_min_sources")]
    pub min_sources: usize,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_social_slices() -> usize {
    40
}

fn default_ngram_shards() -> usize {
    99
}

fn default_merge_cutoff() -> u64 {
    2
}

fn default_min_sources() -> usize {
    2
}

/// Validated configuration. Language lists are sorted and deduplicated.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub sources: BTreeMap<String, Vec<String>>,
    pub wordlist_paths: BTreeMap<String, String>,
    pub social_slices: usize,
    pub ngram_shards: usize,
    pub merge_cutoff: u64,
    pub min_sources: usize,
}

impl ConfigSpec {
    /// Normalize language lists, then check every cross-reference the
    /// planner relies on later:
    /// 1) language codes come from the registry,
    /// 2) every enabled source has a path template,
    /// 3) templates carry both placeholders and never collide,
    /// 4) tunables are in range (slice and shard names are two-digit).
    pub fn validate_and_build(&self) -> Result<Config> {
        let mut sources = BTreeMap::new();
        for (name, langs) in &self.sources {
            let mut langs = langs.clone();
            langs.sort();
            langs.dedup();
            for lang in &langs {
                if !LANGUAGES.contains(&lang.as_str()) {
                    bail!("source '{}' lists unknown language code '{}'", name, lang);
                }
            }
            sources.insert(name.clone(), langs);
        }

        for name in sources.keys() {
            if !self.wordlist_paths.contains_key(name) {
                bail!("source '{}' has no wordlist path template", name);
            }
        }

        let mut seen_templates: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, template) in &self.wordlist_paths {
            if !template.contains("{lang}") || !template.contains("{ext}") {
                bail!(
                    "wordlist path template for '{}' must contain {{lang}} and {{ext}}: {}",
                    name,
                    template
                );
            }
            if let Some(other) = seen_templates.insert(template.as_str(), name.as_str()) {
                bail!(
                    "wordlist path template '{}' is shared by '{}' and '{}'",
                    template,
                    other,
                    name
                );
            }
        }

        if self.data_dir.is_empty() {
            bail!("data_dir must not be empty");
        }
        if self.social_slices == 0 || self.social_slices > 100 {
            bail!("social_slices must be between 1 and 100, got {}", self.social_slices);
        }
        if self.ngram_shards == 0 || self.ngram_shards > 100 {
            bail!("ngram_shards must be between 1 and 100, got {}", self.ngram_shards);
        }
        if self.min_sources == 0 {
            bail!("min_sources must be at least 1");
        }

        Ok(Config {
            data_dir: self.data_dir.clone(),
            sources,
            wordlist_paths: self.wordlist_paths.clone(),
            social_slices: self.social_slices,
            ngram_shards: self.ngram_shards,
            merge_cutoff: self.merge_cutoff,
            min_sources: self.min_sources,
        })
    }
}

impl Config {
    /// Parse and validate a JSON configuration file's contents.
    pub fn from_json(text: &str) -> Result<Config> {
        let spec: ConfigSpec = serde_json::from_str(text)?;
        spec.validate_and_build()
    }

    /// The built-in corpus configuration used when no file is given.
    pub fn default_corpus() -> Result<Config> {
        let spec = ConfigSpec {
            data_dir: default_data_dir(),
            sources: DEFAULT_SOURCES
                .iter()
                .map(|(name, langs)| {
                    (
                        name.to_string(),
                        langs.iter().map(|l| l.to_string()).collect(),
                    )
                })
                .collect(),
            wordlist_paths: DEFAULT_WORDLIST_PATHS
                .iter()
                .map(|(name, template)| (name.to_string(), template.to_string()))
                .collect(),
            social_slices: default_social_slices(),
            ngram_shards: default_ngram_shards(),
            merge_cutoff: default_merge_cutoff(),
            min_sources: default_min_sources(),
        };
        spec.validate_and_build()
    }

    /// Languages a source is enabled for; unknown or disabled sources are
    /// simply empty.
    pub fn languages_for(&self, source: &str) -> &[String] {
        match self.sources.get(source) {
            Some(langs) => langs,
            None => &[],
        }
    }

    /// Names of the sources that supply data for a language, sorted.
    pub fn source_names(&self, language: &str) -> Vec<&str> {
        self.sources
            .iter()
            .filter(|(_, langs)| langs.iter().any(|l| l == language))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Every language with enough contributing sources to be worth a
    /// combined list, sorted.
    pub fn all_languages(&self) -> Vec<String> {
        let mut languages: BTreeSet<&String> = BTreeSet::new();
        for langs in self.sources.values() {
            languages.extend(langs);
        }
        languages
            .into_iter()
            .filter(|lang| self.source_names(lang).len() >= self.min_sources)
            .cloned()
            .collect()
    }
}

const DEFAULT_SOURCES: &[(&str, &[&str])] = &[
    (
        "social",
        &["ar", "de", "en", "es", "fr", "id", "it", "ja", "ko", "ms", "nl", "pt", "ru"],
    ),
    (
        "encyclopedia",
        &["ar", "de", "en", "es", "fr", "id", "it", "ja", "ko", "ms", "nl", "pt", "ru"],
    ),
    ("ngrams", &["en"]),
    (
        "webcorpus",
        &["ar", "de", "el", "en", "es", "fr", "it", "ja", "pt", "ru", "zh"],
    ),
    (
        "subtitles",
        &[
            "ar", "de", "el", "en", "es", "fr", "hu", "id", "it", "ja", "ko", "ms", "nl", "pl",
            "pt", "ro", "ru", "sv", "tr", "zh",
        ],
    ),
    ("norms-en", &["en"]),
    ("norms-other", &["de", "el", "nl", "zh"]),
    ("segdict", &["zh"]),
];

const DEFAULT_WORDLIST_PATHS: &[(&str, &str)] = &[
    ("social", "generated/social/social_{lang}.{ext}"),
    ("encyclopedia", "generated/encyclopedia/encyclopedia_{lang}.{ext}"),
    ("ngrams", "generated/ngrams/ngrams_{lang}.{ext}"),
    ("webcorpus", "generated/webcorpus/webcorpus_{lang}.{ext}"),
    ("subtitles", "generated/subtitles/subtitles_{lang}.{ext}"),
    ("norms-en", "generated/norms/norms-en_{lang}.{ext}"),
    ("norms-other", "generated/norms/norms-other_{lang}.{ext}"),
    ("segdict", "generated/segdict/segdict_{lang}.{ext}"),
    ("combined", "generated/combined/combined_{lang}.{ext}"),
    ("combined-dist", "dist/combined_{lang}.{ext}"),
    ("social-dist", "dist/social_{lang}.{ext}"),
    ("segdict-dist", "dist/segdict_{lang}.{ext}"),
];
