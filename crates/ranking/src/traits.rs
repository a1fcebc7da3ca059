//! Core traits for the ranking pipeline.
//!
//! This module defines the Stage trait that allows composable selection and
//! ordering stages to be applied to record sets.

use anyhow::Result;
use records::UserRecord;

/// Core trait for ranking stages.
///
/// All stages must implement this trait to be used in the RankPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows stages to be used in concurrent contexts
/// - Stages take ownership of the Vec<UserRecord> and return a reduced or
///   reordered Vec
/// - This allows for efficient transformations without unnecessary cloning
pub trait Stage: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this stage to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to process (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<UserRecord>)` - The selected/reordered records
    /// * `Err` - If the stage fails
    fn apply(&self, records: Vec<UserRecord>) -> Result<Vec<UserRecord>>;
}
