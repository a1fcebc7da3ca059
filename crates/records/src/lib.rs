//! # Records Crate
//!
//! Domain types and input-boundary validation for developer leaderboards.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (UserRecord, Count)
//! - **validate**: Convert loosely-typed raw records into UserRecord
//! - **error**: Error types for record validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use records::{validate_records, RawUserRecord};
//!
//! // Records arrive in a loose shape from an external collaborator
//! let raw: Vec<RawUserRecord> = serde_json::from_str(&payload)?;
//!
//! // Either every record is well-formed, or the batch fails outright
//! let users = validate_records(raw)?;
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod validate;

// Re-export commonly used types for convenience
pub use error::{RecordError, Result};
pub use types::{Count, UserRecord};
pub use validate::{validate_records, RawUserRecord};
