//! CMC design system CLI
//!
//! # Usage
//!
//! ```bash
//! # Export the token catalogue
//! cmc tokens --format toml
//! cmc tokens --format tailwind --module > tailwind.tokens.js
//!
//! # Find hex color codes in text
//! cmc hex "Use #0891B2 for primary"
//!
//! # Try the docs search against an item list
//! cmc search --items items.json button
//! ```

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cmc_core::Document;
use cmc_docs::{hex, SearchIndex, SearchOutcome, SearchableItem, Segment};
use cmc_tokens::TokenCatalogue;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cmc")]
#[command(version)]
#[command(about = "CMC design system tokens and documentation tooling")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Page configuration file (defaults to ./docs.toml when present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TokenFormat {
    Json,
    Toml,
    /// Tailwind `theme.extend` object
    Tailwind,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token catalogue
    Tokens {
        #[arg(long, short, default_value = "json", value_enum)]
        format: TokenFormat,

        /// Wrap Tailwind output as a CommonJS module
        #[arg(long)]
        module: bool,
    },

    /// List every color token with its hex value
    Colors,

    /// Split text into literal runs and hex color codes
    Hex {
        text: String,

        /// Print the annotated markup instead of segments
        #[arg(long)]
        html: bool,
    },

    /// Filter a JSON list of searchable items
    Search {
        /// JSON array of `{ "title", "category", "id" }` objects
        #[arg(long, short)]
        items: PathBuf,

        query: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective page configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Tokens { format, module } => cmd_tokens(format, module),
        Commands::Colors => cmd_colors(),
        Commands::Hex { text, html } => cmd_hex(&text, html, cli.config.as_deref()),
        Commands::Search { items, query, json } => {
            cmd_search(&items, &query, json, cli.config.as_deref())
        }
        Commands::Config => cmd_config(cli.config.as_deref()),
    }
}

fn cmd_tokens(format: TokenFormat, module: bool) -> Result<()> {
    let tokens = TokenCatalogue::get();
    let output = match format {
        TokenFormat::Json => tokens.to_json()?,
        TokenFormat::Toml => tokens.to_toml()?,
        TokenFormat::Tailwind if module => tokens.tailwind_config().to_module()?,
        TokenFormat::Tailwind => tokens.tailwind_config().to_json()?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_colors() -> Result<()> {
    let colors = TokenCatalogue::get().hex_colors();
    let width = colors.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in colors {
        println!("{name:<width$}  {value}");
    }
    Ok(())
}

fn cmd_hex(text: &str, html: bool, config_path: Option<&Path>) -> Result<()> {
    if html {
        let config = config::load(config_path)?;
        let mut doc = Document::new();
        let body = doc.body();
        let paragraph = doc.build("p").text(text).append_to(body);
        let controls = hex::annotate_document(&mut doc, &config.hex);
        tracing::info!(controls = controls.len(), "annotated");
        println!("{}", doc.to_html(paragraph));
        return Ok(());
    }

    for segment in hex::annotate(text) {
        match segment {
            Segment::Hex(value) => println!("hex      {value}"),
            Segment::Literal(value) => println!("literal  {value:?}"),
        }
    }
    Ok(())
}

fn cmd_search(path: &Path, query: &str, json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = config::load(config_path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items: Vec<SearchableItem> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let index = SearchIndex::new(items).with_min_query_len(config.search.min_query_len);
    let outcome = index.filter(query);

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.matches())?);
        return Ok(());
    }

    match outcome {
        SearchOutcome::Inactive => {
            tracing::info!(
                min = config.search.min_query_len,
                "query too short, search inactive"
            );
        }
        SearchOutcome::NoResults => println!("{}", config.search.no_results_label),
        SearchOutcome::Matches(matches) => {
            for item in matches {
                println!("#{:<24} {} ({})", item.id, item.title, item.category);
            }
        }
    }
    Ok(())
}

fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = config::load(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
