//! basket: frequent-pattern and association-rule mining over a
//! transaction log.
//!
//! One transaction per input line, whitespace-separated item tokens.
//! Supply several `--min-support` / `--min-confidence` values to sweep
//! thresholds in a single invocation.

mod loader;
mod report;
mod sweep;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "basket", version, about = "Mine frequent itemsets and association rules")]
struct Cli {
    /// Transaction log: one transaction per line, whitespace-separated items
    dataset: PathBuf,

    /// Minimum support count(s); comma-separate or repeat to sweep
    #[arg(long = "min-support", required = true, value_delimiter = ',')]
    min_support: Vec<u64>,

    /// Minimum confidence value(s) in [0, 1] for rule generation
    #[arg(long = "min-confidence", value_delimiter = ',')]
    min_confidence: Vec<f64>,

    /// List every frequent itemset and rule, not just counts
    #[arg(long)]
    show_patterns: bool,

    /// Emit the sweep summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = loader::load_transactions(&cli.dataset)
        .with_context(|| format!("failed to load {}", cli.dataset.display()))?;
    info!(
        transactions = store.len(),
        items = store.item_count(),
        "dataset ready"
    );

    let outcome = sweep::run_sweep(&store, &cli.min_support, &cli.min_confidence);

    if cli.json {
        let summary = sweep::SweepReport::summarize(&store, &outcome);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report::print_outcome(&store, &outcome, cli.show_patterns);
    }

    Ok(())
}

/// Reads `BASKET_LOG` for per-module log levels, defaults to info for
/// both crates. Logs go to stderr so `--json` output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BASKET_LOG")
        .unwrap_or_else(|_| EnvFilter::new("basket_core=info,basket_cli=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
