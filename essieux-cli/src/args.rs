//! Command-line arguments

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use essieux_lib::model::EntityKind;

#[derive(Debug, Parser)]
#[command(name = "essieux")]
#[command(about = "List, export, summarize and check fleet dashboard data")]
pub struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Table settings file (defaults to config.json in the config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Rows per page, overriding the settings file
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of a list view
    List(ViewArgs),
    /// Write the filtered and sorted list view to `<entity>.csv`
    Export {
        #[command(flatten)]
        view: ViewArgs,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Print the dashboard aggregates
    Stats {
        #[arg(long)]
        essieux: PathBuf,
        #[arg(long)]
        travailleurs: PathBuf,
        #[arg(long)]
        stock: Option<PathBuf>,
        #[arg(long)]
        pannes: Option<PathBuf>,
    },
    /// Check every record against the form rules
    Validate {
        entity: EntityKind,
        #[arg(long)]
        data: PathBuf,
    },
}

/// Selects a table and the view state to apply to it.
#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// essieux, travailleurs, stock or pannes
    pub entity: EntityKind,

    /// JSON array of records
    #[arg(long)]
    pub data: PathBuf,

    /// Free-text search over every field
    #[arg(long)]
    pub search: Option<String>,

    /// Filter selection as name=value (`all`, `null` or an exact value)
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Column header click; repeat a key to sort descending
    #[arg(long = "sort")]
    pub sort: Vec<String>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected name=value, got '{}'", s)),
    }
}
