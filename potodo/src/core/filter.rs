// src/core/filter.rs
use crate::core::reservation::ReservationMap;
use crate::models::{FileEntry, FileOutcome, PoFileStats, ThresholdRange};

/// Decides whether one file is shown and, if so, builds its descriptor.
///
/// A file is hidden when it is fully translated or when its completion
/// percentage falls outside the threshold band. Hidden files still count
/// toward the directory mean, which is why the outcome always carries the
/// percentage.
#[must_use]
pub fn evaluate(
    stats: &PoFileStats,
    range: &ThresholdRange,
    reservations: &ReservationMap,
) -> FileOutcome {
    let percent = stats.percent_translated;
    if percent >= 100.0 || !range.contains(percent) {
        return FileOutcome { percent, entry: None };
    }

    let stem = stats
        .filename
        .strip_suffix(".po")
        .unwrap_or(&stats.filename);

    // Reservations are keyed by the directory/filename composite, not the
    // on-disk path: that is what the issue titles name.
    let reservation_key = format!("{}/{}", stats.directory, stats.filename).to_lowercase();

    FileOutcome {
        percent,
        entry: Some(FileEntry {
            filename: stats.filename.clone(),
            name: format!("{}/{}", stats.directory, stem),
            path: stats.path.clone(),
            entries: stats.total_entries,
            fuzzies: stats.fuzzy_entries.len(),
            translated: stats.translated_count,
            untranslated: stats.untranslated_entries.len(),
            pc_translated: percent,
            reserved_by: reservations.get(&reservation_key).cloned(),
        }),
    }
}
