use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rhymebucket::{
    DatamuseClient, DatamuseConfig, Relation, SavedWords, View, rhymes_view, similar_view,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Look up rhymes and similar words, grouped and ready to bookmark
#[derive(Parser)]
#[command(name = "rhymebucket", version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Datamuse API root (overrides config and environment)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Maximum number of words to request
    #[arg(long, global = true)]
    max: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show words that rhyme, grouped by syllable count
    Rhymes(LookupArgs),
    /// Show words with a similar meaning
    Similar(LookupArgs),
}

#[derive(clap::Args)]
struct LookupArgs {
    /// The word to look up
    word: String,

    /// Save a word from the results (repeatable)
    #[arg(long = "save", value_name = "WORD")]
    save: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    view: &'a View,
    saved: &'a SavedWords,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<DatamuseConfig> {
    let config = match &cli.config {
        Some(path) => DatamuseConfig::load(path)?,
        None => DatamuseConfig::default(),
    };
    let mut config = config
        .with_env_overrides()
        .context("failed to apply environment overrides")?;

    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    if let Some(max) = cli.max {
        config.max_results = Some(max);
    }
    debug!(?config, "resolved configuration");
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    let client = DatamuseClient::new(config)?;

    let (relation, args) = match &cli.command {
        Commands::Rhymes(args) => (Relation::Rhyme, args),
        Commands::Similar(args) => (Relation::MeansLike, args),
    };

    let entries = client
        .lookup(relation, &args.word)
        .await
        .with_context(|| format!("failed to fetch {relation} for {:?}", args.word))?;

    let view = match relation {
        Relation::Rhyme => rhymes_view(&args.word, &entries)?,
        Relation::MeansLike => similar_view(&args.word, &entries),
    };

    let mut saved = SavedWords::new();
    saved.save_from(&view, &args.save);

    if args.json {
        let output = Output {
            view: &view,
            saved: &saved,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{view}");
        if !saved.is_empty() {
            println!();
            println!("Saved words: {saved}");
        }
    }

    Ok(())
}
