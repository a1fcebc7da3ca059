//! Stage that keeps the widest-reach accounts.
//!
//! Narrows the location-filtered set down to a pool of the most-followed
//! accounts before the final contribution ranking.

use crate::traits::Stage;
use anyhow::Result;
use records::UserRecord;

/// Ranks records by follower count and keeps the top of the list.
///
/// ## Algorithm
/// 1. Stable sort by `followers` descending
/// 2. Truncate to the configured pool size
///
/// The sort is stable on purpose: records with equal follower counts keep
/// their relative input order, so the cut at the pool boundary is
/// deterministic for any input.
pub struct FollowersRanker {
    pool_size: usize,
}

impl FollowersRanker {
    /// Create a new FollowersRanker.
    ///
    /// # Arguments
    /// * `pool_size` - How many records survive this stage (typically 1000)
    pub fn new(pool_size: usize) -> Self {
        Self { pool_size }
    }
}

impl Stage for FollowersRanker {
    fn name(&self) -> &str {
        "FollowersRanker"
    }

    fn apply(&self, mut records: Vec<UserRecord>) -> Result<Vec<UserRecord>> {
        // Vec::sort_by is stable, which is what gives equal-followers
        // records their input-order tie-break.
        records.sort_by(|a, b| b.followers.cmp(&a.followers));
        records.truncate(self.pool_size);
        Ok(records)
    }
}
