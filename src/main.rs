use anyhow::Context;
use clap::Parser;
use std::io::Write;

mod combine;
mod config;
mod emit;
mod graph;
mod paths;
mod sources;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "freqplan")]
#[command(about = "Plan the build graph for multilingual word frequency lists", long_about = None)]
struct Cli {
    /// Rules-definition file, copied verbatim into the emitted plan.
    rules: String,

    /// JSON corpus configuration; defaults to the built-in corpus.
    #[arg(long)]
    config: Option<String>,

    /// Write the plan here instead of standard output.
    #[arg(short = 'o', long)]
    out: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 1) Load and validate the corpus configuration.
    let cfg = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config file {}", path))?;
            config::Config::from_json(&text)
                .with_context(|| format!("invalid config file {}", path))?
        }
        None => config::Config::default_corpus()?,
    };

    // 2) Read the externally authored rules block.
    let rules_text = std::fs::read_to_string(&cli.rules)
        .with_context(|| format!("read rules file {}", cli.rules))?;

    // 3) Assemble the graph and check its invariants before emitting.
    let graph = sources::plan(&cfg)?;
    graph.check()?;

    // 4) Render the whole plan, then write it in one go.
    let text = emit::render_plan(&rules_text, &cli.rules, cli.config.as_deref(), &graph)?;
    match &cli.out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("write plan to {}", path))?;
        }
        None => {
            std::io::stdout()
                .write_all(text.as_bytes())
                .context("write plan to stdout")?;
        }
    }

    Ok(())
}
