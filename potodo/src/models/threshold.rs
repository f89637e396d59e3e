// src/models/threshold.rs
use anyhow::{Result, bail};

/// Effective completion band, after defaulting absent bounds.
///
/// A bound that the caller sets to 0 or 100 explicitly behaves exactly like
/// an absent one; absence is still represented as `None` so the two cases
/// stay distinguishable at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdRange {
    pub above: u32,
    pub below: u32,
}

impl ThresholdRange {
    /// Resolves raw bounds into an effective `[above, below]` range.
    ///
    /// # Errors
    ///
    /// Fails when the resolved `below` is less than the resolved `above`.
    pub fn new(above: Option<u32>, below: Option<u32>) -> Result<Self> {
        let above = above.unwrap_or(0);
        let below = below.unwrap_or(100);
        if below < above {
            bail!("invalid range: below ({below}) must not be less than above ({above})");
        }
        Ok(Self { above, below })
    }

    /// Whether a completion percentage falls inside the band, bounds included.
    #[must_use]
    pub fn contains(&self, percent: f64) -> bool {
        percent >= f64::from(self.above) && percent <= f64::from(self.below)
    }
}
