// src/models/po_file.rs

/// Translation statistics for a single po file, as produced by the parser.
///
/// The reporting engine only reads these; it never mutates them.
#[derive(Debug, Clone)]
pub struct PoFileStats {
    /// Name of the directory the file sits in (not the full parent path).
    pub directory: String,
    /// File name, including the `.po` extension.
    pub filename: String,
    /// Path of the file as given to the scanner.
    pub path: String,
    /// Total number of messages, excluding the header.
    pub total_entries: usize,
    /// Messages translated and not flagged fuzzy.
    pub translated_count: usize,
    /// Msgids of messages flagged fuzzy.
    pub fuzzy_entries: Vec<String>,
    /// Msgids of messages with an empty translation (and not fuzzy).
    pub untranslated_entries: Vec<String>,
    /// Completion percentage, 0.0 to 100.0. A file with no entries is 100%.
    pub percent_translated: f64,
}
