// src/models/outcome.rs
use serde::Serialize;

/// Descriptor for a file that passed the visibility filter.
///
/// Field declaration order is the JSON key order; `filename` and
/// `untranslated` feed the text renderer only and are never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    #[serde(skip)]
    pub filename: String,
    /// `directory/stem`, extension stripped.
    pub name: String,
    pub path: String,
    pub entries: usize,
    pub fuzzies: usize,
    pub translated: usize,
    #[serde(skip)]
    pub untranslated: usize,
    pub pc_translated: f64,
    pub reserved_by: Option<String>,
}

/// Outcome of filtering one file: its percentage always counts toward the
/// directory mean; the descriptor is present only when the file is shown.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub percent: f64,
    pub entry: Option<FileEntry>,
}

/// All per-file outcomes of one directory, in file-sorted order.
#[derive(Debug, Clone)]
pub struct DirectoryReport {
    pub name: String,
    pub outcomes: Vec<FileOutcome>,
}

impl DirectoryReport {
    /// Arithmetic mean over every outcome, shown or hidden.
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn mean_percent(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let total: f64 = self.outcomes.iter().map(|o| o.percent).sum();
        total / self.outcomes.len() as f64
    }

    /// A directory is reported only when at least one file is shown.
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        self.outcomes.iter().any(|o| o.entry.is_some())
    }

    /// Shown files, in the order they were filtered.
    pub fn visible(&self) -> impl Iterator<Item = &FileEntry> {
        self.outcomes.iter().filter_map(|o| o.entry.as_ref())
    }
}
