//! Stage implementations for the ranking pipeline.
//!
//! This module contains all the concrete stage implementations
//! that can be composed into a RankPipeline.

pub mod contributions;
pub mod followers;
pub mod location;

// Re-export for convenience
pub use contributions::ContributionsRanker;
pub use followers::FollowersRanker;
pub use location::LocationFilter;
