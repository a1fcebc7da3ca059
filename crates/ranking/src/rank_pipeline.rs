//! The RankPipeline orchestrates multiple stages.
//!
//! This module provides the main RankPipeline struct that chains
//! multiple stages together using the builder pattern.

use crate::traits::Stage;
use anyhow::Result;
use records::UserRecord;
use tracing;

/// Chains multiple stages together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = RankPipeline::new()
///     .add_stage(LocationFilter::new("Indonesia"))
///     .add_stage(FollowersRanker::new(1000))
///     .add_stage(ContributionsRanker::new(256));
///
/// let ranked = pipeline.apply(users)?;
/// ```
pub struct RankPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl RankPipeline {
    /// Create a new empty RankPipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `stage` - Any type implementing the Stage trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Apply all stages in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each stage in order:
    ///    a. Log stage name and input count
    ///    b. Apply the stage
    ///    c. Log output count
    /// 3. Return the final record set
    ///
    /// # Arguments
    /// * `records` - The records to process
    ///
    /// # Returns
    /// * `Ok(Vec<UserRecord>)` - The records after all stages
    /// * `Err` - If any stage fails
    pub fn apply(&self, records: Vec<UserRecord>) -> Result<Vec<UserRecord>> {
        let mut current = records;
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} (input count: {})",
                stage.name(),
                current.len()
            );
            current = stage.apply(current)?;
            tracing::debug!(
                "Stage applied: {} (output count: {})",
                stage.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for RankPipeline {
    fn default() -> Self {
        Self::new()
    }
}
