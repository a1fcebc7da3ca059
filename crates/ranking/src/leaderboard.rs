//! Leaderboard assembly: the canonical three-stage ranking.
//!
//! Filters a record collection to one location, narrows to the most-followed
//! pool, then orders the pool by contribution volume:
//!
//! 1. Keep records located in the target region (exact match)
//! 2. Stable sort by `followers` descending, keep the top 1000
//! 3. Stable sort by `contributions` descending, keep the top 256
//!
//! The result is at most [`LEADERBOARD_SIZE`] records, sorted by
//! contributions with follower order breaking ties.

use crate::rank_pipeline::RankPipeline;
use crate::stages::{ContributionsRanker, FollowersRanker, LocationFilter};
use anyhow::Result;
use records::UserRecord;
use tracing::{debug, instrument};

/// Location label the default leaderboard selects.
pub const TARGET_LOCATION: &str = "Indonesia";

/// How many accounts survive the followers stage.
pub const FOLLOWERS_POOL_SIZE: usize = 1000;

/// Maximum length of the final leaderboard.
pub const LEADERBOARD_SIZE: usize = 256;

/// Builds ranked leaderboards from account record collections.
///
/// Holds no state between invocations: `rank` is a pure function of its
/// input collection.
pub struct Leaderboard {
    location: String,
    pool_size: usize,
    size: usize,
}

impl Leaderboard {
    /// Create a Leaderboard with the default configuration.
    pub fn new() -> Self {
        Self {
            location: TARGET_LOCATION.to_string(),
            pool_size: FOLLOWERS_POOL_SIZE,
            size: LEADERBOARD_SIZE,
        }
    }

    /// Configure the location label (default: "Indonesia")
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Configure the followers pool size (default: 1000)
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Configure the final leaderboard size (default: 256)
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Rank a collection of records into a leaderboard.
    #[instrument(skip(self, users), fields(input_count = users.len(), location = %self.location))]
    pub fn rank(&self, users: Vec<UserRecord>) -> Result<Vec<UserRecord>> {
        let pipeline = RankPipeline::new()
            .add_stage(LocationFilter::new(&self.location))
            .add_stage(FollowersRanker::new(self.pool_size))
            .add_stage(ContributionsRanker::new(self.size));

        let ranked = pipeline.apply(users)?;

        debug!("Built leaderboard with {} entries", ranked.len());
        Ok(ranked)
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank records with the default configuration.
///
/// Convenience wrapper around [`Leaderboard::rank`].
pub fn build_leaderboard(users: Vec<UserRecord>) -> Result<Vec<UserRecord>> {
    Leaderboard::new().rank(users)
}
