//! Final ranking stage: order the pool by contribution volume.
//!
//! Runs after the followers pool cut, so ties on contributions fall back to
//! the followers-descending order established by the previous stage.

use crate::traits::Stage;
use anyhow::Result;
use records::UserRecord;

/// Ranks records by contribution count and keeps the top of the list.
///
/// ## Algorithm
/// 1. Stable sort by `contributions` descending
/// 2. Truncate to the configured size
pub struct ContributionsRanker {
    keep: usize,
}

impl ContributionsRanker {
    /// Create a new ContributionsRanker.
    ///
    /// # Arguments
    /// * `keep` - How many records survive this stage (typically 256)
    pub fn new(keep: usize) -> Self {
        Self { keep }
    }
}

impl Stage for ContributionsRanker {
    fn name(&self) -> &str {
        "ContributionsRanker"
    }

    fn apply(&self, mut records: Vec<UserRecord>) -> Result<Vec<UserRecord>> {
        records.sort_by(|a, b| b.contributions.cmp(&a.contributions));
        records.truncate(self.keep);
        Ok(records)
    }
}
