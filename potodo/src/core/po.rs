// src/core/po.rs
use anyhow::{Context as _, Result, bail};
use polib::po_file;
use std::fs;
use std::path::Path;

use crate::models::PoFileStats;

/// Header fields polib's metadata parser unwraps; a file missing any of
/// them would panic inside `po_file::parse`.
const REQUIRED_HEADER_FIELDS: &[&str] = &[
    "Project-Id-Version",
    "POT-Creation-Date",
    "PO-Revision-Date",
    "Language-Team",
    "MIME-Version",
    "Content-Type",
    "Content-Transfer-Encoding",
    "Language",
    "Plural-Forms",
];

/// Rejects a sparse header before handing the file to polib, so the
/// failure stays on the error path.
fn check_header(content: &str, path: &Path) -> Result<()> {
    let header = content.split("\n\n").next().unwrap_or(content);
    for field in REQUIRED_HEADER_FIELDS {
        if !header.contains(&format!("{field}:")) {
            bail!(
                "Incomplete po header in {}: missing {field}",
                path.display()
            );
        }
    }
    Ok(())
}

/// Parses a po file and reduces its catalog to translation statistics.
///
/// A message counts as translated only when it is not flagged fuzzy; fuzzy
/// messages are listed separately and never count as untranslated. The
/// catalog header is not a message and is excluded from every count.
///
/// # Errors
///
/// This function may return an error if the file cannot be read, its header
/// is missing metadata fields polib requires, or it is not valid po syntax.
pub fn parse_po_stats(path: &Path) -> Result<PoFileStats> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read po file: {}", path.display()))?;
    check_header(&content, path)?;

    let catalog = po_file::parse(path)
        .with_context(|| format!("Failed to parse po file: {}", path.display()))?;

    let mut translated_count: usize = 0;
    let mut total_entries: usize = 0;
    let mut fuzzy_entries: Vec<String> = Vec::new();
    let mut untranslated_entries: Vec<String> = Vec::new();

    for message in catalog.messages() {
        total_entries = total_entries.saturating_add(1);
        if message.is_fuzzy() {
            fuzzy_entries.push(message.msgid().to_string());
        } else if message.is_translated() {
            translated_count = translated_count.saturating_add(1);
        } else {
            untranslated_entries.push(message.msgid().to_string());
        }
    }

    let directory = path
        .parent()
        .and_then(Path::file_name)
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
    let filename = path
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

    Ok(PoFileStats {
        directory,
        filename,
        path: path.display().to_string(),
        total_entries,
        translated_count,
        percent_translated: percent_translated(translated_count, total_entries),
        fuzzy_entries,
        untranslated_entries,
    })
}

/// Completion percentage, with the convention that an empty file is done.
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn percent_translated(translated: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (translated as f64 / total as f64) * 100.0
}
