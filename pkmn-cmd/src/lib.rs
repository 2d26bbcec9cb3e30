//! Command implementations for the PKMN CLI.
//!
//! Provides subcommands that load the battle statistics CSV and either
//! summarize it or run the same cross-filter the dashboard runs, printing
//! the resulting chart specs.

use anyhow::Context;
use clap::Subcommand;
use pkmn_filter::{Dimension, Selection, StatRange};
use pkmn_stats::{Dataset, Stat};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod crossfilter;
pub mod summary;

/// Dataset location used when `--dataset` is not given.
pub const DEFAULT_DATASET: &str = "fixtures/pkmn6v6smogon.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Print per-type, per-tier and per-generation counts for the whole dataset
    Summary {
        /// Path to the battle statistics CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATASET)]
        dataset: PathBuf,
    },

    /// Apply a selection and print the four chart specs as JSON
    Reconcile {
        /// Path to the battle statistics CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATASET)]
        dataset: PathBuf,

        /// Selected primary types, comma separated (e.g. Fire,Water)
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,

        /// Selected tiers, comma separated (e.g. OU,UU)
        #[arg(long, value_delimiter = ',')]
        tiers: Vec<String>,

        /// Selected generations, comma separated (e.g. 1,2)
        #[arg(long, value_delimiter = ',')]
        generations: Vec<String>,

        /// Axis brush as AXIS=LOW:HIGH, e.g. "Attack=100:150" (repeatable)
        #[arg(long = "range", value_parser = crossfilter::parse_range)]
        ranges: Vec<(Stat, StatRange)>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Load the dataset and report rows whose Stat Total disagrees with their base stats
    Validate {
        /// Path to the battle statistics CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATASET)]
        dataset: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Summary { dataset } => {
            let dataset = load(&dataset)?;
            summary::write_summary(&dataset, &mut out)?;
        }
        Command::Reconcile {
            dataset,
            types,
            tiers,
            generations,
            ranges,
            pretty,
        } => {
            let dataset = load(&dataset)?;
            let mut selection = Selection::default()
                .with_labels(Dimension::Type, types)
                .with_labels(Dimension::Tier, tiers)
                .with_labels(Dimension::Generation, generations);
            for (stat, range) in ranges {
                selection.set_range(stat, Some(range));
            }
            let json = crossfilter::reconcile_json(&dataset, &selection, pretty)?;
            writeln!(out, "{}", json)?;
        }
        Command::Validate { dataset } => {
            let dataset = load(&dataset)?;
            summary::write_validation(&dataset, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<Dataset> {
    Dataset::from_path(path).with_context(|| format!("loading dataset {}", path.display()))
}
