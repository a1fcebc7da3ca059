//! Stage to keep only records from one location.
//!
//! This is the first stage in the pipeline: everything downstream ranks
//! within a single country/region.

use crate::traits::Stage;
use anyhow::Result;
use records::UserRecord;

/// Keeps records whose `location` equals a configured label.
///
/// ## Algorithm
/// Byte-for-byte string equality. Matching is deliberately exact:
/// case-sensitive, no trimming, no localized-name mapping. Upstream data
/// with inconsistent capitalization will under-select rather than be
/// silently normalized.
pub struct LocationFilter {
    location: String,
}

impl LocationFilter {
    /// Create a new LocationFilter.
    ///
    /// # Arguments
    /// * `location` - The exact location label to keep
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
        }
    }
}

impl Stage for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn apply(&self, records: Vec<UserRecord>) -> Result<Vec<UserRecord>> {
        let kept: Vec<UserRecord> = records
            .into_iter()
            .filter(|record| record.location == self.location)
            .collect();
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_filter() {
        let users = vec![
            UserRecord::new("a", "Indonesia", 100, 5),
            UserRecord::new("b", "USA", 500, 50),
            UserRecord::new("c", "Indonesia", 200, 1),
        ];

        let stage = LocationFilter::new("Indonesia");
        let kept = stage.apply(users).unwrap();

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].login, "a");
        assert_eq!(kept[1].login, "c");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let users = vec![
            UserRecord::new("a", "indonesia", 100, 5),
            UserRecord::new("b", "INDONESIA", 200, 1),
            UserRecord::new("c", " Indonesia", 300, 2),
        ];

        let stage = LocationFilter::new("Indonesia");
        let kept = stage.apply(users).unwrap();

        assert!(kept.is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let users = vec![
            UserRecord::new("first", "Indonesia", 1, 1),
            UserRecord::new("second", "Indonesia", 2, 2),
            UserRecord::new("third", "Indonesia", 3, 3),
        ];

        let kept = LocationFilter::new("Indonesia").apply(users).unwrap();

        let logins: Vec<&str> = kept.iter().map(|r| r.login.as_str()).collect();
        assert_eq!(logins, vec!["first", "second", "third"]);
    }
}
