// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::aggregate::{build_reports, directory_report};
use crate::core::discover::scan_tree;
use crate::core::render::{render_directory, render_json};
use crate::core::reservation::{RESERVATION_ENDPOINT, ReservationMap, fetch_reservations};
use crate::models::ThresholdRange;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Only list files translated at or above this percentage
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub above: Option<u32>,

    /// Only list files translated at or below this percentage
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub below: Option<u32>,

    /// Only list files containing fuzzy entries
    #[arg(short, long)]
    pub fuzzy: bool,

    /// Do not fetch reservation data from the network
    #[arg(short, long)]
    pub offline: bool,

    /// Do not show who reserved which file
    #[arg(short = 'n', long)]
    pub no_reserved: bool,

    /// Show counts of remaining entries rather than percentage done
    #[arg(short, long)]
    pub counts: bool,

    /// Format output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Runs one report over the given arguments.
///
/// Text mode prints each directory as soon as its files are processed;
/// JSON mode accumulates every directory and serializes once at the end.
/// Any failure aborts before output so a partial report is never emitted.
///
/// # Errors
///
/// This function may return an error if:
/// * The threshold range is inconsistent
/// * Reservation data is requested but cannot be fetched
/// * The directory cannot be scanned or a po file fails to parse
pub fn run(args: Args) -> Result<()> {
    let range = ThresholdRange::new(args.above, args.below)?;

    let reservations = if args.offline || args.no_reserved {
        ReservationMap::new()
    } else {
        fetch_reservations(RESERVATION_ENDPOINT)?
    };

    let tree = scan_tree(&args.path)
        .with_context(|| format!("Failed to scan directory: {}", args.path.display()))?;

    if args.json {
        let reports = build_reports(&tree, &range, &reservations, args.fuzzy);
        println!("{}", render_json(&reports)?);
    } else {
        for (name, files) in &tree {
            let report = directory_report(name, files, &range, &reservations, args.fuzzy);
            if let Some(block) = render_directory(&report, args.counts) {
                println!("{block}");
            }
        }
    }

    Ok(())
}
