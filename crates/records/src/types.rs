//! Core domain types for platform account records.
//!
//! This module defines the fundamental data structures used throughout the
//! leaderboard system. Records are immutable inputs: the ranking stages only
//! select and reorder them, never mutate them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Follower and contribution counts are plain non-negative tallies.
///
/// The alias keeps signatures readable and prevents mixing counts up with
/// positional indices.
pub type Count = u64;

// =============================================================================
// UserRecord
// =============================================================================

/// One platform account's profile data.
///
/// This is the unit the ranking stages operate on. The comparison fields
/// (`location`, `followers`, `contributions`) are guaranteed present and
/// numeric once a record exists — the raw boundary shape in
/// [`crate::validate`] is where missing or malformed fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Account handle, e.g. a GitHub username.
    pub login: String,
    /// Free-text country/region label, compared byte-for-byte.
    pub location: String,
    pub followers: Count,
    pub contributions: Count,
}

impl UserRecord {
    /// Create a new UserRecord.
    pub fn new(login: &str, location: &str, followers: Count, contributions: Count) -> Self {
        Self {
            login: login.to_string(),
            location: location.to_string(),
            followers,
            contributions,
        }
    }
}
