//! Validation of raw account records at the input boundary.
//!
//! Upstream collaborators (an API response, a scraped export) hand records
//! over in a loose shape: any field may be absent, and counts arrive as
//! signed integers. This module converts that shape into [`UserRecord`],
//! rejecting anything malformed.
//!
//! Validation is fail-fast: the first bad record aborts the whole batch.

use crate::error::{RecordError, Result};
use crate::types::{Count, UserRecord};
use serde::{Deserialize, Serialize};

/// The loosely-typed shape account records arrive in.
///
/// Every field is optional so that deserialization itself never hides a
/// missing field — absence is surfaced as a [`RecordError::MissingField`]
/// during validation instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawUserRecord {
    pub login: Option<String>,
    pub location: Option<String>,
    pub followers: Option<i64>,
    pub contributions: Option<i64>,
}

impl RawUserRecord {
    /// Validate this raw record into a [`UserRecord`].
    ///
    /// # Arguments
    /// * `index` - Position of the record in its source collection, carried
    ///   into error messages.
    ///
    /// # Returns
    /// * `Ok(UserRecord)` - All required fields present and well-formed
    /// * `Err(RecordError)` - A field was missing or a count was negative
    pub fn validate(self, index: usize) -> Result<UserRecord> {
        let login = self.login.ok_or_else(|| RecordError::MissingField {
            index,
            field: "login".to_string(),
        })?;

        let location = self.location.ok_or_else(|| RecordError::MissingField {
            index,
            field: "location".to_string(),
        })?;

        let followers = validate_count(self.followers, "followers", index)?;
        let contributions = validate_count(self.contributions, "contributions", index)?;

        Ok(UserRecord {
            login,
            location,
            followers,
            contributions,
        })
    }
}

/// Check a raw count field: present and non-negative.
fn validate_count(value: Option<i64>, field: &str, index: usize) -> Result<Count> {
    let value = value.ok_or_else(|| RecordError::MissingField {
        index,
        field: field.to_string(),
    })?;

    // Negative counts are rejected rather than clamped. Clamping to zero
    // would silently reorder the ranking.
    Count::try_from(value).map_err(|_| RecordError::NegativeCount {
        index,
        field: field.to_string(),
        value,
    })
}

/// Validate a whole batch of raw records.
///
/// The first malformed record aborts the batch: the caller gets either a
/// complete `Vec<UserRecord>` or an error, never a partial result.
pub fn validate_records(raw: Vec<RawUserRecord>) -> Result<Vec<UserRecord>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}
