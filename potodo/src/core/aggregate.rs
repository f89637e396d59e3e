// src/core/aggregate.rs
use crate::core::discover::PoFileTree;
use crate::core::filter::evaluate;
use crate::core::reservation::ReservationMap;
use crate::models::{DirectoryReport, FileOutcome, PoFileStats, ThresholdRange};

/// Filters one directory's files into an ordered outcome sequence.
///
/// With `fuzzy_only`, files without fuzzy entries are dropped before the
/// visibility filter runs, so they do not count toward the mean either.
#[must_use]
pub fn collect_outcomes(
    files: &[PoFileStats],
    range: &ThresholdRange,
    reservations: &ReservationMap,
    fuzzy_only: bool,
) -> Vec<FileOutcome> {
    files
        .iter()
        .filter(|stats| !fuzzy_only || !stats.fuzzy_entries.is_empty())
        .map(|stats| evaluate(stats, range, reservations))
        .collect()
}

/// Builds one report per directory.
#[must_use]
pub fn directory_report(
    name: &str,
    files: &[PoFileStats],
    range: &ThresholdRange,
    reservations: &ReservationMap,
    fuzzy_only: bool,
) -> DirectoryReport {
    DirectoryReport {
        name: name.to_string(),
        outcomes: collect_outcomes(files, range, reservations, fuzzy_only),
    }
}

/// Builds reports for the whole tree, in sorted directory order.
#[must_use]
pub fn build_reports(
    tree: &PoFileTree,
    range: &ThresholdRange,
    reservations: &ReservationMap,
    fuzzy_only: bool,
) -> Vec<DirectoryReport> {
    tree.iter()
        .map(|(name, files)| directory_report(name, files, range, reservations, fuzzy_only))
        .collect()
}
