//! Ranking pipeline for developer leaderboards.
//!
//! This crate provides:
//! - Stage trait and implementations for record selection and ordering
//! - RankPipeline for composing stages
//! - Leaderboard for the canonical location/followers/contributions ranking
//!
//! ## Architecture
//! The pipeline processes records in stages:
//! 1. LocationFilter keeps records from the target region (exact match)
//! 2. FollowersRanker keeps the 1000 most-followed accounts
//! 3. ContributionsRanker orders that pool by contribution volume and keeps
//!    the top 256
//!
//! ## Example Usage
//! ```ignore
//! use ranking::{build_leaderboard, Leaderboard, RankPipeline};
//! use ranking::stages::*;
//!
//! // Default leaderboard
//! let ranked = build_leaderboard(users)?;
//!
//! // Or compose the stages explicitly
//! let pipeline = RankPipeline::new()
//!     .add_stage(LocationFilter::new("Indonesia"))
//!     .add_stage(FollowersRanker::new(1000))
//!     .add_stage(ContributionsRanker::new(256));
//!
//! let ranked = pipeline.apply(users)?;
//! ```

pub mod leaderboard;
pub mod rank_pipeline;
pub mod stages;
pub mod traits;

// Re-export main types
pub use leaderboard::{
    build_leaderboard, Leaderboard, FOLLOWERS_POOL_SIZE, LEADERBOARD_SIZE, TARGET_LOCATION,
};
pub use rank_pipeline::RankPipeline;
pub use traits::Stage;
