//! `snbt` CLI: format, validate and convert SNBT from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Canonical SNBT (stdin → stdout)
//! echo "{id: 1,hint: 'nice'}" | snbt fmt
//!
//! # Component data from file to file
//! snbt fmt --component -i item.txt -o item.snbt
//!
//! # Validate and report the top-level kind
//! snbt check -i player.snbt
//!
//! # SNBT to JSON and back
//! snbt to-json --pretty -i player.snbt
//! echo '{"Count":"3b"}' | snbt from-json
//!
//! # Inspect and edit block identifiers
//! snbt block "oak_stairs[half=top]" --merge "[waterlogged=true]"
//! ```
//!
//! Logging goes to stderr. `-v` enables debug output, `-vv` trace output;
//! `RUST_LOG` overrides both.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use snbt_core::{Block, ComponentData, Tag};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snbt", version, about = "SNBT and data component CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct Files {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite SNBT in canonical form
    Fmt {
        #[command(flatten)]
        files: Files,
        /// Read data component syntax (`[key=value,...]`)
        #[arg(long)]
        component: bool,
    },
    /// Validate SNBT and print the kind of its top-level value
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Read data component syntax (`[key=value,...]`)
        #[arg(long)]
        component: bool,
    },
    /// Convert SNBT to JSON
    ToJson {
        #[command(flatten)]
        files: Files,
        /// Read data component syntax (`[key=value,...]`)
        #[arg(long)]
        component: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Convert JSON to SNBT with the default conversion rules
    FromJson {
        #[command(flatten)]
        files: Files,
        /// Write a top-level object as data component syntax
        #[arg(long)]
        component: bool,
    },
    /// Show the parts of a block identifier, optionally editing it
    Block {
        /// Block text such as `minecraft:oak_stairs[half=top]`
        block: String,
        /// Component data to merge into the block (`[key=value,...]`)
        #[arg(long)]
        merge: Option<String>,
        /// Replace the block id, keeping its component data
        #[arg(long)]
        with_id: Option<String>,
        /// Rewrite the components as an item `block_state`
        #[arg(long)]
        item: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Fmt { files, component } => {
            let text = read_input(files.input.as_deref())?;
            let tag = parse_input(&text, component)?;
            write_output(files.output.as_deref(), &tag.to_string())?;
        }
        Commands::Check { input, component } => {
            let text = read_input(input.as_deref())?;
            let tag = parse_input(&text, component)?;
            println!("ok: {}", tag.kind());
        }
        Commands::ToJson {
            files,
            component,
            pretty,
        } => {
            let text = read_input(files.input.as_deref())?;
            let tag = parse_input(&text, component)?;
            let json = if pretty {
                serde_json::to_string_pretty(&tag)?
            } else {
                serde_json::to_string(&tag)?
            };
            write_output(files.output.as_deref(), &json)?;
        }
        Commands::FromJson { files, component } => {
            let text = read_input(files.input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&text).context("Failed to parse JSON")?;
            let tag = Tag::from_json(value).context("Failed to convert JSON to SNBT")?;
            let snbt = match (component, tag) {
                (true, Tag::Compound(map)) => map
                    .to_component_data()
                    .context("Failed to convert object to component data")?
                    .to_string(),
                (true, other) => {
                    anyhow::bail!("Component data needs a JSON object, found {}", other.kind())
                }
                (false, tag) => tag.to_string(),
            };
            write_output(files.output.as_deref(), &snbt)?;
        }
        Commands::Block {
            block,
            merge,
            with_id,
            item,
        } => {
            let mut block = Block::new(block);
            if let Some(id) = with_id {
                block = block.with_id(id);
            }
            if let Some(data) = merge {
                let data = ComponentData::parse(&data)
                    .with_context(|| format!("Failed to parse component data: {data}"))?;
                block = block
                    .with_merge_data(&data)
                    .context("Failed to merge component data")?;
            }
            if item {
                block = block
                    .as_block_state_for_item()
                    .context("Failed to build item block state")?;
            }
            let data = block
                .data()
                .with_context(|| format!("Failed to parse block data: {}", block.data_str()))?;
            println!("block:     {block}");
            println!("id:        {}", block.id());
            println!("namespace: {}", block.namespace());
            println!("name:      {}", block.name());
            println!("data:      {data}");
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_input(text: &str, component: bool) -> Result<Tag> {
    debug!(bytes = text.len(), component, "parsing input");
    if component {
        let data = snbt_core::parse_component(text).context("Failed to parse component data")?;
        Ok(Tag::Component(data))
    } else {
        snbt_core::parse(text).context("Failed to parse SNBT")
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
