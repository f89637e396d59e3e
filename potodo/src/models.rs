// src/models.rs
pub mod outcome;
pub mod po_file;
pub mod threshold;

pub use outcome::{DirectoryReport, FileEntry, FileOutcome};
pub use po_file::PoFileStats;
pub use threshold::ThresholdRange;
