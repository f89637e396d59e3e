// src/core/render.rs
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::{DirectoryReport, FileEntry};

/// JSON record for one reported directory. Key order is the contract.
#[derive(Debug, Serialize)]
struct DirectoryRecord<'a> {
    name: String,
    pc_translated: f64,
    files: Vec<&'a FileEntry>,
}

impl<'a> DirectoryRecord<'a> {
    fn from_report(report: &'a DirectoryReport) -> Self {
        Self {
            name: format!("{}/", report.name),
            pc_translated: round2(report.mean_percent()),
            files: report.visible().collect(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders one file's text line.
///
/// The filename is padded to a fixed column; what follows is either the
/// remaining-work count or the translated ratio, then the fuzzy count and
/// the reservation, when present.
#[must_use]
pub fn render_file_line(entry: &FileEntry, counts: bool) -> String {
    let mut line = format!("- {:<30} ", entry.filename);

    if counts {
        let missing = entry.fuzzies.saturating_add(entry.untranslated);
        line.push_str(&format!("{missing:3} to do"));
        if entry.fuzzies > 0 {
            line.push_str(&format!(", including {} fuzzies.", entry.fuzzies));
        }
    } else {
        line.push_str(&format!(
            "{:3} / {:3} ({:5.1}% translated)",
            entry.translated, entry.entries, entry.pc_translated
        ));
        if entry.fuzzies > 0 {
            line.push_str(&format!(", {} fuzzy", entry.fuzzies));
        }
    }

    if let Some(name) = &entry.reserved_by {
        line.push_str(&format!(", reserved by {name}"));
    }

    line
}

/// Renders one directory's text block, or `None` when nothing is shown.
#[must_use]
pub fn render_directory(report: &DirectoryReport, counts: bool) -> Option<String> {
    if !report.is_reportable() {
        return None;
    }
    let lines: Vec<String> = report
        .visible()
        .map(|entry| render_file_line(entry, counts))
        .collect();
    Some(format!(
        "\n\n# {}/ ({:.2}% done)\n\n{}",
        report.name,
        report.mean_percent(),
        lines.join("\n")
    ))
}

/// Serializes the reportable directories as one JSON document.
///
/// Four-space indentation and insertion key order are part of the output
/// contract; callers print the result verbatim.
///
/// # Errors
///
/// This function may return an error if serialization fails or produces
/// invalid UTF-8, neither of which is expected for these records.
pub fn render_json(reports: &[DirectoryReport]) -> Result<String> {
    let records: Vec<DirectoryRecord> = reports
        .iter()
        .filter(|report| report.is_reportable())
        .map(DirectoryRecord::from_report)
        .collect();

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}
