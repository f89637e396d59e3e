// src/core/discover.rs
use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::po::parse_po_stats;
use crate::models::PoFileStats;
use crate::utils::is_hidden;

/// Po files grouped by directory name, directories in sorted order.
pub type PoFileTree = BTreeMap<String, Vec<PoFileStats>>;

/// Walks a directory tree and gathers statistics for every po file in it.
///
/// Hidden entries (such as `.git`) are skipped. Within each directory the
/// files are sorted by filename, so downstream iteration order is stable.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be accessed or read
/// * A po file fails to parse
pub fn scan_tree(dir: &Path) -> Result<PoFileTree> {
    let mut tree = PoFileTree::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "po") {
            continue;
        }

        let stats = parse_po_stats(path)?;
        debug!(
            "parsed {} ({:.1}% translated)",
            path.display(),
            stats.percent_translated
        );
        tree.entry(stats.directory.clone()).or_default().push(stats);
    }

    for files in tree.values_mut() {
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
    }

    Ok(tree)
}
