//! Path naming service: deterministic file names for every generated
//! artifact. Pure string work, no I/O.
//!
//! All names are rooted in the configured data directory. Per-source
//! names go through the source's wordlist template, so a given
//! (source, language, extension) triple always maps to the same path and
//! two distinct triples never collide (templates are validated to be
//! pairwise distinct and to carry both placeholders).

use crate::Result;
use crate::config::Config;
use anyhow::Context;

/// A path under the data directory.
pub fn data_filename(cfg: &Config, relative: &str) -> String {
    format!("{}/{}", cfg.data_dir, relative)
}

/// The generated wordlist file for a source, language, and stage suffix.
/// Unknown sources are a configuration defect and fail the whole plan.
pub fn wordlist_filename(cfg: &Config, source: &str, language: &str, ext: &str) -> Result<String> {
    let template = cfg
        .wordlist_paths
        .get(source)
        .with_context(|| format!("no wordlist path template for source '{}'", source))?;
    let relative = template.replace("{lang}", language).replace("{ext}", ext);
    Ok(data_filename(cfg, &relative))
}
